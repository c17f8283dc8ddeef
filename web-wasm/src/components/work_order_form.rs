//! Campos de la orden de trabajo
//!
//! Muestra el catálogo de campos. Cada control lee y escribe en la única
//! señal `FormRecord`; lat/lon además avisan `change` para que el mapa los siga.
//! Los campos requeridos solo se marcan en la etiqueta: el manejador de envío
//! los revisa y muestra su propia alerta.

use catastro_common::fields::{FieldKind, FieldSpec, WORK_ORDER_FIELDS};
use catastro_common::record::ids;
use catastro_common::FormRecord;
use leptos::prelude::*;

/// El elemento `#catastroForm`.
///
/// Sin validación nativa del navegador, todo envío llega a `on_submit`.
#[component]
pub fn OrderForm<FS>(on_submit: FS, children: Children) -> impl IntoView
where
    FS: FnMut(leptos::ev::SubmitEvent) + 'static,
{
    view! {
        <form id="catastroForm" novalidate=true on:submit=on_submit>
            {children()}
        </form>
    }
}

#[component]
pub fn WorkOrderForm<FC>(
    record: RwSignal<FormRecord>,
    on_coordinates_changed: FC,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let fields = WORK_ORDER_FIELDS
        .iter()
        .map(|field| {
            view! {
                <div class="form-group">
                    <label for=field.id>
                        {field.label}
                        {field.required.then_some(" *")}
                    </label>
                    {field_input(field, record, on_coordinates_changed.clone())}
                </div>
            }
        })
        .collect_view();

    view! { <div class="work-order-grid">{fields}</div> }
}

fn field_input<FC>(
    field: &'static FieldSpec,
    record: RwSignal<FormRecord>,
    on_coordinates_changed: FC,
) -> AnyView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let id = field.id;
    let value = move || record.with(|r| r.get(id).to_string());
    let is_coordinate = id == ids::LAT || id == ids::LON;
    let on_change = move |_| {
        if is_coordinate {
            on_coordinates_changed(());
        }
    };

    match field.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                id=id
                readonly=field.read_only
                prop:value=value
                on:input=move |ev| record.update(|r| r.set(id, event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                step="any"
                id=id
                prop:value=value
                on:input=move |ev| record.update(|r| r.set(id, event_target_value(&ev)))
                on:change=on_change
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=id
                prop:value=value
                on:change=move |ev| record.update(|r| r.set(id, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=id
                rows="3"
                prop:value=value
                on:input=move |ev| record.update(|r| r.set(id, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use catastro_common::blank_record;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlFormElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_submit_with_empty_clave_reaches_handler() {
        let record = RwSignal::new(blank_record());
        let (submitted, set_submitted) = signal(false);

        leptos::mount::mount_to_body(move || {
            view! {
                <OrderForm on_submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    set_submitted.set(true);
                }>
                    <WorkOrderForm record=record on_coordinates_changed=|_: ()| {} />
                </OrderForm>
            }
        });

        let document = web_sys::window().unwrap().document().unwrap();
        let clave = document.get_element_by_id(ids::CLAVE).expect("clave input");
        assert!(!clave.has_attribute("required"));
        assert_eq!(record.get_untracked().get(ids::CLAVE), "");

        let form: HtmlFormElement = document
            .get_element_by_id("catastroForm")
            .expect("form")
            .dyn_into()
            .unwrap();
        assert!(form.no_validate());
        form.request_submit().unwrap();

        assert!(submitted.get_untracked());
    }
}
