use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use policyplay_web::app::App;
use policyplay_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_signed_out() {
    if let Ok(Some(storage)) = dom::window().local_storage() {
        let _ = storage.clear();
    }
    policyplay_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_signed_out();
    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
}

#[wasm_bindgen_test]
fn visitors_see_sign_in_actions() {
    render_signed_out();
    let doc = dom::document();
    assert!(doc.query_selector("[data-testid='nav-login']").expect("query").is_some());
    assert!(doc.query_selector("[data-testid='nav-logout']").expect("query").is_none());
}

#[wasm_bindgen_test]
fn login_link_reaches_the_form() {
    render_signed_out();
    let doc = dom::document();
    let link: HtmlElement = doc
        .query_selector("[data-testid='nav-login']")
        .expect("query login link")
        .expect("login link exists")
        .dyn_into()
        .expect("cast to element");
    link.click();
    assert_eq!(dom::window().location().pathname().unwrap_or_default(), "/login");
}
