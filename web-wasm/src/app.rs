//! Componente principal de la aplicación

use crate::api::FetchBackend;
use crate::components::{
    action_buttons::ActionButtons,
    header::Header,
    map_panel::MapPanel,
    qr_panel::QrPanel,
    settings_panel::SettingsPanel,
    work_order_form::{OrderForm, WorkOrderForm},
};
use crate::export::csv_download::download_csv;
use crate::{map, notify};
use catastro_common::backend::SUBMIT_FAILED_MESSAGE;
use catastro_common::date::format_fecha;
use catastro_common::record::ids;
use catastro_common::validation::{validate_required, MISSING_FIELDS_MESSAGE};
use catastro_common::{
    blank_record, BackendConfig, Error, FormRecord, MapConfig, SubmitPolicy, Submitter,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Lo que muestra el contenedor QR.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QrState {
    #[default]
    Empty,
    Sending,
    Ready(String),
    Failed,
}

impl QrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrState::Empty => "empty",
            QrState::Sending => "sending",
            QrState::Ready(_) => "ready",
            QrState::Failed => "error",
        }
    }
}

/// Campos del catálogo con `fecha` en el día de hoy.
fn initial_record() -> FormRecord {
    let mut record = blank_record();
    let today = js_sys::Date::new_0();
    record.set(
        ids::FECHA,
        format_fecha(today.get_full_year() as i32, today.get_month() + 1, today.get_date()),
    );
    record
}

#[component]
pub fn App() -> impl IntoView {
    let record = RwSignal::new(initial_record());
    let (backend_config, set_backend_config) = signal(BackendConfig::default());
    let (qr_state, set_qr_state) = signal(QrState::Empty);
    let marker_sync = map::new_shared();
    let submitter = StoredValue::new_local(Rc::new(Submitter::new(
        FetchBackend::new(backend_config),
        SubmitPolicy::from(&backend_config.get_untracked()),
    )));

    let is_sending = Signal::derive(move || qr_state.get() == QrState::Sending);

    // Generar folio y QR
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = record.get_untracked();

        if validate_required(&data).is_err() {
            notify::alert(MISSING_FIELDS_MESSAGE);
            return;
        }

        let submitter = submitter.get_value();
        if submitter.is_busy() {
            return;
        }
        submitter.set_policy(SubmitPolicy::from(&backend_config.get_untracked()));
        set_qr_state.set(QrState::Sending);

        spawn_local(async move {
            match submitter.submit(&data).await {
                Ok(receipt) => {
                    record.update(|r| receipt.write_into(r));
                    set_qr_state.set(QrState::Ready(receipt.qr_image_url.clone()));
                    notify::alert(&receipt.saved_message());
                }
                Err(Error::SubmissionInFlight) => {}
                Err(e) => {
                    notify::log_error("Error al enviar datos", &e.to_string());
                    set_qr_state.set(QrState::Failed);
                    notify::alert(SUBMIT_FAILED_MESSAGE);
                }
            }
        });
    };

    let on_export_csv = move |_| {
        let data = record.get_untracked();
        if let Err(e) = download_csv(&data) {
            notify::log_error("Error al exportar CSV", &e);
            notify::alert("No se pudo exportar el CSV.");
        }
    };

    let on_coordinates_changed = move |_| {
        map::manual_entry(marker_sync, record);
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                backend_config=backend_config
                set_backend_config=set_backend_config
            />

            <OrderForm on_submit=on_submit>
                <WorkOrderForm
                    record=record
                    on_coordinates_changed=on_coordinates_changed
                />

                <MapPanel
                    record=record
                    marker_sync=marker_sync
                    map_config=MapConfig::default()
                />

                <ActionButtons
                    is_sending=is_sending
                    on_export_csv=on_export_csv
                />
            </OrderForm>

            <QrPanel qr_state=qr_state />
        </div>
    }
}
