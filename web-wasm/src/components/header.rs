//! Componente de encabezado

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Orden de Trabajo Catastral"</h1>
        </header>
    }
}
