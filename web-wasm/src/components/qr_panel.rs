//! Contenedor del QR del folio

use crate::app::QrState;
use catastro_common::backend::{QR_ALT_TEXT, SENDING_STATUS, SUBMIT_FAILED_STATUS};
use leptos::prelude::*;

#[component]
pub fn QrPanel(qr_state: ReadSignal<QrState>) -> impl IntoView {
    view! {
        <div id="qrcode" class=move || format!("qr-container {}", qr_state.get().as_str())>
            {move || match qr_state.get() {
                QrState::Empty => ().into_any(),
                QrState::Sending => SENDING_STATUS.into_any(),
                QrState::Failed => SUBMIT_FAILED_STATUS.into_any(),
                QrState::Ready(url) => view! {
                    <img src=url alt=QR_ALT_TEXT style="width: 100%; height: 100%;" />
                }
                .into_any(),
            }}
        </div>
    }
}
