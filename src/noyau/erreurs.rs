// src/noyau/erreurs.rs
//
// Taxonomie des erreurs côté noyau.
// - ErreurCalcul : erreur utilisateur (mauvais jeton, lecture, division par zéro…)
// - les défauts de logique interne ne sont PAS ici : ce sont des panics

use std::fmt;

use thiserror::Error;

/// Ce que l’automate attendait quand le jeton est arrivé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attendu {
    Operande1,
    Operande2,
    Operateur,
}

impl fmt::Display for Attendu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attendu::Operande1 => f.write_str("operand 1"),
            Attendu::Operande2 => f.write_str("operand 2"),
            Attendu::Operateur => f.write_str("operator"),
        }
    }
}

/// Ce qui est arrivé à la place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recu {
    Operande,
    Operateur,
    FinDeCalcul,
    Invalide(String),
}

impl fmt::Display for Recu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recu::Operande => f.write_str("operand"),
            Recu::Operateur => f.write_str("operator"),
            Recu::FinDeCalcul => f.write_str("end-of-calculation"),
            Recu::Invalide(mot) => write!(f, "invalid token '{mot}'"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("expected {attendu}, got {recu}")]
    JetonInattendu { attendu: Attendu, recu: Recu },

    #[error("failed to parse input '{0}'")]
    Lecture(String),

    #[error("failed to parse input '{0}': invalid cross-type parse")]
    NonEntier(String),

    #[error("failed to parse input '{0}': parse type value overflow")]
    Depassement(String),

    #[error("division by zero")]
    DivisionParZero,

    #[error("integer overflow")]
    DebordementEntier,
}

impl ErreurCalcul {
    pub fn inattendu(attendu: Attendu, recu: Recu) -> Self {
        ErreurCalcul::JetonInattendu { attendu, recu }
    }
}
