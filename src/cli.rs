use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catastro-orden")]
#[command(about = "Captura y envío de órdenes de trabajo catastrales", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Registro detallado
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Captura una orden de forma interactiva y la guarda como JSON
    Capture {
        /// Archivo JSON de salida
        #[arg(short, long, default_value = "orden.json")]
        output: PathBuf,
    },

    /// Exporta una orden JSON a CSV
    Export {
        /// Archivo JSON de la orden
        #[arg(required = true)]
        input: PathBuf,

        /// Archivo o directorio de salida (por defecto: junto a la entrada)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Envía una orden al servidor y guarda el folio asignado
    Submit {
        /// Archivo JSON de la orden
        #[arg(required = true)]
        input: PathBuf,

        /// Dónde escribir la orden actualizada (por defecto: sobrescribe la entrada)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// URL del servidor para esta ejecución
        #[arg(long)]
        endpoint: Option<String>,

        /// Genera el folio localmente en lugar de llamar al servidor
        #[arg(long)]
        simulate: bool,
    },

    /// Muestra o edita la configuración
    Config {
        /// Define la URL del servidor
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Activa o desactiva el servidor simulado
        #[arg(long)]
        simulate: Option<bool>,

        /// Muestra la configuración
        #[arg(long)]
        show: bool,
    },
}
