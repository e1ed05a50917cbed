use dioxus::prelude::*;
use folio::components::App as PortfolioApp;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Cross-platform logger (web console + desktop stdout).
    // DEBUG level for development builds, INFO for release builds.
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Folio")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1200.0, 900.0))
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(Root);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(Root);
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        body { class: "pf-body",
            PortfolioApp {}
        }
    }
}
