//! src/app/etat.rs
//!
//! Réglages de session (sans vue, sans noyau actif).
//!
//! Rôle : regrouper les choix fixés au démarrage (type numérique, politique,
//! classement des mots, débordement, fin de ligne) avec leurs valeurs par défaut.
//!
//! Contrats :
//! - Aucune évaluation ici.
//! - Aucune lecture d’environnement : main.rs remplit, le reste consomme.

use crate::noyau::{Classement, Debordement};

/// Type numérique de l’évaluateur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TypeNumerique {
    I8,
    I16,
    I32,
    #[default]
    I64,
    I128,
    F32,
    F64,
}

/// Que faire après un résultat ou une erreur de calcul.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Politique {
    /// Première issue (résultat ou erreur) => fin de session.
    #[default]
    Arret,
    /// Pile et état remis à zéro, on continue jusqu’à la fin du flux.
    Reprise,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub type_numerique: TypeNumerique,
    pub politique: Politique,
    pub classement: Classement,
    pub debordement: Debordement,
    /// Un '\n' termine le calcul courant.
    pub lignes: bool,
}

impl Reglages {
    /// Réglages adaptés à un usage interactif ligne par ligne.
    pub fn interactif() -> Self {
        Self {
            politique: Politique::Reprise,
            lignes: true,
            ..Self::default()
        }
    }
}
