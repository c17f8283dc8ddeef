//! Alertas bloqueantes y diagnóstico en consola

pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

pub fn log_error(context: &str, detail: &str) {
    gloo::console::error!(format!("{}: {}", context, detail));
}
