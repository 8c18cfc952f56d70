use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Wall-clock start in milliseconds.
    pub started_at_ms: u64,
    /// Initial reading, used before the first tick.
    #[prop_or_default]
    pub elapsed_secs: u64,
}

/// `mm:ss` for a number of seconds.
#[must_use]
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Running clock that ticks once a second in the browser.
#[function_component(ElapsedTimer)]
pub fn elapsed_timer(p: &Props) -> Html {
    let elapsed = use_state(|| p.elapsed_secs);

    #[cfg(target_arch = "wasm32")]
    {
        let elapsed = elapsed.clone();
        use_effect_with(p.started_at_ms, move |started| {
            let started = *started;
            let interval = gloo::timers::callback::Interval::new(1_000, move || {
                elapsed.set(crate::dom::now_ms().saturating_sub(started) / 1_000);
            });
            move || drop(interval)
        });
    }

    html! {
        <div class="badge badge-lg badge-info gap-2" data-testid="elapsed-timer">
            <span>{ "⏱️" }</span>
            <span>{ format_clock(*elapsed) }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(3_600), "60:00");
    }
}
