//! Componente de botones de acción

use leptos::prelude::*;

#[component]
pub fn ActionButtons<FE>(
    is_sending: Signal<bool>,
    on_export_csv: FE,
) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone,
{
    view! {
        <div class="export-buttons">
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || is_sending.get()
            >
                {move || if is_sending.get() { "Enviando..." } else { "Generar Folio y QR" }}
            </button>

            <button
                type="button"
                id="exportCsv"
                class="btn btn-secondary"
                on:click={
                    let on_export_csv = on_export_csv.clone();
                    move |_| on_export_csv(())
                }
            >
                "Exportar CSV"
            </button>
        </div>
    }
}
