mod components;
mod coords;
mod pages;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use pinpoint_shared::config::ExerciseConfig;
use pinpoint_shared::session::Session;

use pages::entry::EntryPage;
use pages::result::ResultPage;
use pages::selection::SelectionPage;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    EntryPage {},
    #[route("/grid")]
    SelectionPage {},
    #[route("/result")]
    ResultPage {},
}

const CSS: Asset = asset!("/assets/main.css");
const EXERCISE_CONFIG: &str = include_str!("../assets/exercise.json");

fn load_config() -> ExerciseConfig {
    match ExerciseConfig::from_json(EXERCISE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default exercise config: {e}");
            ExerciseConfig::default()
        }
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    // One session for the app's lifetime; every screen reads the same pin.
    use_context_provider(|| Signal::new(Session::new(load_config())));

    rsx! {
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}
