mod avatar;
mod contact;
mod effects;
mod hero;
mod homepage;
mod hooks;
mod nav;
mod showcase;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::VariantPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Suresh Maheshwari - {title}") />
        <Meta
            name="description"
            content="Portfolio of Suresh Maheshwari: AI, machine learning and web development."
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/:variant?") view=VariantPage />
            </Routes>
        </Router>
    }
}
