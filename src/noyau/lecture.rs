// src/noyau/lecture.rs
//
// Lecture d’une opérande (texte -> valeur du type choisi).
//
// Pipeline :
//   texte -> syntaxe décimale -> BigRational exact -> intégralité -> bornes -> rétrécissement
//
// Le rationnel exact sert de représentation "large" : les contrôles d’intégralité
// et de bornes sont faits une seule fois, de la même façon pour tous les types.
//
// Syntaxe acceptée (le texte ENTIER doit être consommé) :
//   [-] chiffres [ . chiffres ] [ (e|E) [+|-] chiffres ]
//   (au moins un chiffre avant l’exposant ; "5." et ".5" acceptés)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreurs::ErreurCalcul;
use super::nombre::Nombre;

/// Au-delà (en ordre de grandeur), une valeur non nulle sort de tout type supporté.
const EXPOSANT_MAX: i64 = 4096;

/// Résultat de l’analyse syntaxique.
#[derive(Debug, PartialEq)]
enum Decimal {
    Valeur(BigRational),
    TropGrand,
    TropPetit,
}

/// Lit `texte` comme une valeur de type `T`.
///
/// Panique si `texte` est vide : un jeton vide ne peut pas sortir du tokenizer,
/// donc c’est un défaut de logique, pas une erreur utilisateur.
pub fn parse<T: Nombre>(texte: &str) -> Result<T, ErreurCalcul> {
    assert!(!texte.is_empty(), "parse appelé sur un texte vide");

    let r = match analyse_decimal(texte) {
        Some(Decimal::Valeur(r)) => r,
        Some(Decimal::TropGrand) => return Err(ErreurCalcul::Depassement(texte.into())),
        Some(Decimal::TropPetit) if T::ENTIER => {
            return Err(ErreurCalcul::NonEntier(texte.into()))
        }
        Some(Decimal::TropPetit) | None => return Err(ErreurCalcul::Lecture(texte.into())),
    };

    if T::ENTIER && !r.is_integer() {
        return Err(ErreurCalcul::NonEntier(texte.into()));
    }

    if r > T::max_value().vers_rationnel() || r < T::min_value().vers_rationnel() {
        return Err(ErreurCalcul::Depassement(texte.into()));
    }

    T::depuis_rationnel(&r).ok_or_else(|| ErreurCalcul::Depassement(texte.into()))
}

/* ------------------------ Syntaxe décimale -> rationnel ------------------------ */

fn analyse_decimal(s: &str) -> Option<Decimal> {
    let b = s.as_bytes();
    let mut i = 0;

    let negatif = b.first() == Some(&b'-');
    if negatif {
        i += 1;
    }

    // partie entière + fraction : on accumule tous les chiffres dans la mantisse
    let mut chiffres = String::new();
    while i < b.len() && b[i].is_ascii_digit() {
        chiffres.push(b[i] as char);
        i += 1;
    }
    let mut nb_fraction: i64 = 0;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            chiffres.push(b[i] as char);
            nb_fraction += 1;
            i += 1;
        }
    }
    if chiffres.is_empty() {
        return None;
    }

    // exposant optionnel
    let mut exposant: i64 = 0;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        let mut exp_negatif = false;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            exp_negatif = b[i] == b'-';
            i += 1;
        }
        let debut = i;
        while i < b.len() && b[i].is_ascii_digit() {
            exposant = exposant
                .saturating_mul(10)
                .saturating_add(i64::from(b[i] - b'0'));
            i += 1;
        }
        if i == debut {
            return None;
        }
        if exp_negatif {
            exposant = -exposant;
        }
    }

    // tout doit être consommé
    if i != b.len() {
        return None;
    }

    // chiffres significatifs seulement : les zéros de tête ne comptent pas,
    // ceux de queue passent dans l’exposant ("1.000" == 1, "1000e-3" == 1)
    let significatifs = chiffres.trim_start_matches('0').trim_end_matches('0');
    if significatifs.is_empty() {
        return Some(Decimal::Valeur(BigRational::zero()));
    }
    let zeros_de_queue = chiffres.trim_end_matches('0').len();
    let zeros_de_queue = (chiffres.len() - zeros_de_queue) as i64;
    let exposant = exposant
        .saturating_sub(nb_fraction)
        .saturating_add(zeros_de_queue);

    // ordre de grandeur décimal de la valeur : le premier chiffre vaut 10^magnitude
    let magnitude = exposant.saturating_add(significatifs.len() as i64 - 1);
    if magnitude > EXPOSANT_MAX {
        return Some(Decimal::TropGrand);
    }
    if magnitude < -EXPOSANT_MAX {
        return Some(Decimal::TropPetit);
    }

    // ici |exposant| <= EXPOSANT_MAX + nombre de chiffres : borné par le texte
    let mantisse = BigInt::parse_bytes(significatifs.as_bytes(), 10)?;
    let puissance = BigInt::from(10).pow(exposant.unsigned_abs() as u32);
    let mut r = if exposant >= 0 {
        BigRational::from_integer(mantisse * puissance)
    } else {
        BigRational::new(mantisse, puissance)
    };
    if negatif {
        r = -r;
    }
    debug_assert!(negatif == r.is_negative());

    Some(Decimal::Valeur(r))
}
