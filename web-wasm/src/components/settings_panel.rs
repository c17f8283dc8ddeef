//! Panel de ajustes del servidor

use catastro_common::BackendConfig;
use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    backend_config: ReadSignal<BackendConfig>,
    set_backend_config: WriteSignal<BackendConfig>,
) -> impl IntoView {
    view! {
        <details class="settings-panel">
            <summary>"Servidor"</summary>
            <div class="settings-grid">
                <div class="form-group">
                    <label for="endpoint">"URL del servidor"</label>
                    <input
                        type="text"
                        id="endpoint"
                        placeholder="/api/generar-orden.php"
                        prop:value=move || backend_config.get().endpoint
                        on:input=move |ev| {
                            set_backend_config.update(|c| c.endpoint = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="simulate">
                        <input
                            type="checkbox"
                            id="simulate"
                            prop:checked=move || backend_config.get().simulate
                            on:change=move |ev| {
                                set_backend_config.update(|c| c.simulate = event_target_checked(&ev));
                            }
                        />
                        " Simular servidor"
                    </label>
                </div>

                <div class="form-group">
                    <label for="timeout">"Tiempo de espera (s)"</label>
                    <input
                        type="number"
                        id="timeout"
                        min="1"
                        prop:value=move || (backend_config.get().timeout_ms / 1000).to_string()
                        on:change=move |ev| {
                            if let Ok(secs) = event_target_value(&ev).parse::<u64>() {
                                set_backend_config.update(|c| c.timeout_ms = secs.max(1) * 1000);
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="attempts">"Intentos"</label>
                    <select
                        id="attempts"
                        prop:value=move || backend_config.get().max_attempts.to_string()
                        on:change=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                                set_backend_config.update(|c| c.max_attempts = n);
                            }
                        }
                    >
                        <option value="1">"1"</option>
                        <option value="2">"2"</option>
                        <option value="3">"3"</option>
                        <option value="5">"5"</option>
                    </select>
                </div>
            </div>
        </details>
    }
}
