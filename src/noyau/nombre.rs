// src/noyau/nombre.rs
//
// Type numérique de l’évaluateur (fixé à la construction, jamais par jeton).
// Un seul trait, implémenté par macro pour i8..i128 et f32/f64.
//
// Politique arithmétique :
// - *_enveloppe : sémantique "native" sans panic (wrapping pour les entiers, IEEE pour les flottants)
// - *_verifie   : None si débordement (entiers) ou résultat non fini (flottants)

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Bounded, NumCast, Signed, ToPrimitive, Zero};

pub trait Nombre: Copy + PartialOrd + fmt::Display + fmt::Debug + Signed + Bounded {
    /// Vrai pour les types entiers (lecture : refuse les valeurs fractionnaires).
    const ENTIER: bool;

    /// Nom court (journalisation, --type).
    const NOM: &'static str;

    /// Valeur exacte en rationnel (sert aux bornes).
    fn vers_rationnel(self) -> BigRational;

    /// Rétrécissement depuis un rationnel déjà validé (intégralité + bornes).
    fn depuis_rationnel(r: &BigRational) -> Option<Self>;

    fn add_enveloppe(self, rhs: Self) -> Self;
    fn sub_enveloppe(self, rhs: Self) -> Self;
    fn mul_enveloppe(self, rhs: Self) -> Self;
    fn div_enveloppe(self, rhs: Self) -> Self;
    fn rem_enveloppe(self, rhs: Self) -> Self;

    fn add_verifie(self, rhs: Self) -> Option<Self>;
    fn sub_verifie(self, rhs: Self) -> Option<Self>;
    fn mul_verifie(self, rhs: Self) -> Option<Self>;
    fn div_verifie(self, rhs: Self) -> Option<Self>;
    fn rem_verifie(self, rhs: Self) -> Option<Self>;

    fn est_zero(self) -> bool {
        self.is_zero()
    }
}

macro_rules! nombre_entier {
    ($($t:ty),*) => {$(
        impl Nombre for $t {
            const ENTIER: bool = true;
            const NOM: &'static str = stringify!($t);

            fn vers_rationnel(self) -> BigRational {
                BigRational::from_integer(BigInt::from(self))
            }

            fn depuis_rationnel(r: &BigRational) -> Option<Self> {
                if !r.is_integer() {
                    return None;
                }
                <$t as NumCast>::from(r.to_integer())
            }

            fn add_enveloppe(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            fn sub_enveloppe(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            fn mul_enveloppe(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
            fn div_enveloppe(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
            fn rem_enveloppe(self, rhs: Self) -> Self { self.wrapping_rem(rhs) }

            fn add_verifie(self, rhs: Self) -> Option<Self> { self.checked_add(rhs) }
            fn sub_verifie(self, rhs: Self) -> Option<Self> { self.checked_sub(rhs) }
            fn mul_verifie(self, rhs: Self) -> Option<Self> { self.checked_mul(rhs) }
            fn div_verifie(self, rhs: Self) -> Option<Self> { self.checked_div(rhs) }
            fn rem_verifie(self, rhs: Self) -> Option<Self> { self.checked_rem(rhs) }
        }
    )*};
}

macro_rules! nombre_flottant {
    ($($t:ty),*) => {$(
        impl Nombre for $t {
            const ENTIER: bool = false;
            const NOM: &'static str = stringify!($t);

            fn vers_rationnel(self) -> BigRational {
                // les bornes sont finies : from_float ne rend None que pour NaN/inf
                BigRational::from_float(self).unwrap_or_else(BigRational::zero)
            }

            fn depuis_rationnel(r: &BigRational) -> Option<Self> {
                let v = r.to_f64()?;
                let v = <$t as NumCast>::from(v)?;
                v.is_finite().then_some(v)
            }

            fn add_enveloppe(self, rhs: Self) -> Self { self + rhs }
            fn sub_enveloppe(self, rhs: Self) -> Self { self - rhs }
            fn mul_enveloppe(self, rhs: Self) -> Self { self * rhs }
            fn div_enveloppe(self, rhs: Self) -> Self { self / rhs }
            fn rem_enveloppe(self, rhs: Self) -> Self { self % rhs }

            fn add_verifie(self, rhs: Self) -> Option<Self> { fini(self + rhs) }
            fn sub_verifie(self, rhs: Self) -> Option<Self> { fini(self - rhs) }
            fn mul_verifie(self, rhs: Self) -> Option<Self> { fini(self * rhs) }
            fn div_verifie(self, rhs: Self) -> Option<Self> { fini(self / rhs) }
            fn rem_verifie(self, rhs: Self) -> Option<Self> { fini(self % rhs) }
        }
    )*};
}

fn fini<T: num_traits::Float>(v: T) -> Option<T> {
    v.is_finite().then_some(v)
}

nombre_entier!(i8, i16, i32, i64, i128);
nombre_flottant!(f32, f64);
