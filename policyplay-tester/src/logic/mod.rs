pub mod escape_player;
pub mod reports;
pub mod tap_player;
pub mod tester;

pub use escape_player::{EscapeOutcome, EscapePlayer, EscapeStrategy};
pub use reports::{generate_console_report, generate_json_report, generate_markdown_report};
pub use tap_player::{TapOutcome, TapPlayer, TapStrategy};
pub use tester::{LogicTester, ScenarioResult};
