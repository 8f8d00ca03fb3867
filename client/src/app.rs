//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::content::PROFILE;
use crate::pages::{
    blog::BlogPage, blog_post::BlogPostPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage,
    project_detail::ProjectDetailPage, projects::ProjectsPage,
};
use crate::state::theme::provide_theme_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-surface text-body antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = provide_theme_store();
    // Read the persisted preference once, after mount.
    Effect::new(move || theme.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title formatter=|page: String| format!("{page} · {}", PROFILE.name)/>
        <Meta name="description" content=PROFILE.tagline/>

        <Router>
            <Navigation/>
            <main class="min-h-screen pt-20">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
