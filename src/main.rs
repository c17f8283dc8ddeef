use catastro_common::backend::{QR_ALT_TEXT, SENDING_STATUS, SUBMIT_FAILED_MESSAGE};
use catastro_common::validation::MISSING_FIELDS_MESSAGE;
use catastro_common::{Error as FormError, SubmitPolicy, Submitter};
use catastro_orden::{backend, capture, cli, config, error, export, io};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{CatastroError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(message.to_string());
    spinner
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Capture { output } => {
            println!("📝 catastro-orden - Captura\n");

            let record = capture::run_interactive_capture()?;
            io::save_record(&output, &record)?;
            println!("\n✔ Orden guardada: {}", output.display());
        }

        Commands::Export { input, output } => {
            println!("📄 catastro-orden - Exportar CSV\n");

            let record = io::load_record(&input)?;
            let output_dir = output.unwrap_or_else(|| {
                input
                    .parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
            });
            let path = export::export_csv(&record, &output_dir)?;
            println!("✔ CSV guardado: {}", path.display());
        }

        Commands::Submit { input, output, endpoint, simulate } => {
            println!("🚀 catastro-orden - Generar folio\n");

            let mut config = config;
            if let Some(endpoint) = endpoint {
                config.backend.endpoint = endpoint;
                config.backend.simulate = false;
            }
            if simulate {
                config.backend.simulate = true;
            }

            // 1. Leer orden
            println!("[1/3] Leyendo orden...");
            let mut record = io::load_record(&input)?;
            println!("✔ {}\n", input.display());

            // 2. Enviar
            let backend = backend::CliBackend::from_config(&config)?;
            println!("[2/3] Enviando a {}...", backend.describe());
            let submitter = Submitter::new(backend, SubmitPolicy::from(&config.backend));

            let progress = spinner(SENDING_STATUS);
            let result = submitter.submit(&record).await;
            progress.finish_and_clear();

            let receipt = match result {
                Ok(receipt) => receipt,
                Err(FormError::MissingFields(fields)) => {
                    tracing::debug!(?fields, "required fields are empty");
                    println!("✘ {}", MISSING_FIELDS_MESSAGE);
                    return Err(FormError::MissingFields(fields).into());
                }
                Err(e) => {
                    tracing::error!(error = %e, "submission failed");
                    println!("✘ {}", SUBMIT_FAILED_MESSAGE);
                    return Err(CatastroError::from(e));
                }
            };
            receipt.write_into(&mut record);
            println!("✔ {}\n", receipt.saved_message());

            // 3. Guardar
            println!("[3/3] Guardando orden...");
            let target = output.unwrap_or(input);
            io::save_record(&target, &record)?;
            println!("✔ Orden guardada: {}", target.display());
            println!("  Folio: {}", receipt.folio);
            println!("  {}: {}", QR_ALT_TEXT, receipt.qr_image_url);

            println!("\n✅ Listo");
        }

        Commands::Config { set_endpoint, simulate, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ Servidor configurado");
            }

            if let Some(simulate) = simulate {
                config.set_simulate(simulate)?;
                println!("✔ Simulación {}", if simulate { "activada" } else { "desactivada" });
            }

            if show {
                println!("Configuración:");
                println!("  Archivo: {}", Config::config_path()?.display());
                println!("  Servidor: {}", config.backend.endpoint);
                println!("  Simulación: {}", if config.backend.simulate { "sí" } else { "no" });
                println!("  Tiempo de espera: {} ms", config.backend.timeout_ms);
                println!("  Intentos: {}", config.backend.max_attempts);
                println!("  Espera entre intentos: {} ms", config.backend.retry_delay_ms);
            }
        }
    }

    Ok(())
}
