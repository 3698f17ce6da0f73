// src/main.rs
//
// Calculatrice RPN — point d’entrée (terminal)
// --------------------------------------------
// But:
// - lire les options (clap) et remplir Reglages
// - journalisation sur stderr (stdout ne porte que les résultats)
// - brancher stdin/stdout sur la session
//
// Journalisation : CALC_RPN_LOG, sinon RUST_LOG, sinon "warn".

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod app;
mod noyau;

use app::{Politique, Reglages, TypeNumerique};
use noyau::{Classement, Debordement};

/// Variable d’environnement du filtre de journalisation.
const VAR_LOG: &str = "CALC_RPN_LOG";

/// Calculatrice RPN : lit des mots séparés par des blancs sur l’entrée standard,
/// écrit le résultat (ou "Error: ...") sur la sortie standard.
#[derive(Parser, Debug)]
#[command(name = "calculatrice_rpn", version)]
struct Args {
    /// Type numérique de l’évaluateur
    #[arg(long = "type", value_enum)]
    type_numerique: Option<TypeNumerique>,

    /// Après un résultat ou une erreur : arrêter, ou repartir à zéro
    #[arg(long, value_enum)]
    politique: Option<Politique>,

    /// Classement des mots : strict (jeton invalide) ou différé (lecture numérique)
    #[arg(long, value_enum)]
    classement: Option<Classement>,

    /// Débordement entier : natif (enveloppe) ou signalé (verifie)
    #[arg(long, value_enum)]
    debordement: Option<Debordement>,

    /// Un retour à la ligne termine le calcul courant
    #[arg(long)]
    lignes: bool,

    /// Raccourci : --politique reprise --lignes
    #[arg(long)]
    interactif: bool,
}

impl Args {
    fn reglages(&self) -> Reglages {
        let base = if self.interactif {
            Reglages::interactif()
        } else {
            Reglages::default()
        };

        Reglages {
            type_numerique: self.type_numerique.unwrap_or(base.type_numerique),
            politique: self.politique.unwrap_or(base.politique),
            classement: self.classement.unwrap_or(base.classement),
            debordement: self.debordement.unwrap_or(base.debordement),
            lignes: self.lignes || base.lignes,
        }
    }
}

fn installer_journal() {
    let filtre = EnvFilter::try_from_env(VAR_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    installer_journal();

    let reglages = args.reglages();
    tracing::debug!(?reglages, "réglages");

    app::executer(&reglages, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
