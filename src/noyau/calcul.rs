// src/noyau/calcul.rs
//
// Évaluateur arithmétique : une opération binaire, deux opérandes.
// - division / modulo par zéro => ErreurCalcul (jamais de panic)
// - débordement entier : hors politique par défaut (wrapping natif),
//   ou signalé si Debordement::Verifie

use super::erreurs::ErreurCalcul;
use super::jetons::Op;
use super::nombre::Nombre;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Debordement {
    /// Sémantique native du type, sans contrôle (wrapping pour les entiers).
    #[default]
    Enveloppe,
    /// Débordement => "integer overflow".
    Verifie,
}

/// Calcule `lhs op rhs`.
pub fn calculate<T: Nombre>(
    lhs: T,
    rhs: T,
    op: Op,
    debordement: Debordement,
) -> Result<T, ErreurCalcul> {
    if matches!(op, Op::Slash | Op::Percent) && rhs.est_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }

    match debordement {
        Debordement::Enveloppe => Ok(match op {
            Op::Plus => lhs.add_enveloppe(rhs),
            Op::Minus => lhs.sub_enveloppe(rhs),
            Op::Star => lhs.mul_enveloppe(rhs),
            Op::Slash => lhs.div_enveloppe(rhs),
            Op::Percent => lhs.rem_enveloppe(rhs),
        }),
        Debordement::Verifie => match op {
            Op::Plus => lhs.add_verifie(rhs),
            Op::Minus => lhs.sub_verifie(rhs),
            Op::Star => lhs.mul_verifie(rhs),
            Op::Slash => lhs.div_verifie(rhs),
            Op::Percent => lhs.rem_verifie(rhs),
        }
        .ok_or(ErreurCalcul::DebordementEntier),
    }
}
