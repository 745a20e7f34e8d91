use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use registration_app::{ManualRegistrationForm, SchemaRegistrationForm};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Registration" />
        <Meta
            name="description"
            content="Client-side registration form with schema-based and hand-rolled validation variants."
        />

        <Router>
            <main class="site-root">
                <nav class="engine-nav">
                    <A href="/">"Schema validation"</A>
                    <A href="/manual">"Manual validation"</A>
                </nav>
                <Routes>
                    <Route path="" view=SchemaFormPage />
                    <Route path="/manual" view=ManualFormPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SchemaFormPage() -> impl IntoView {
    view! {
        <section class="form-page">
            <SchemaRegistrationForm />
        </section>
    }
}

#[component]
fn ManualFormPage() -> impl IntoView {
    view! {
        <section class="form-page">
            <ManualRegistrationForm />
        </section>
    }
}
