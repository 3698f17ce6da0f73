// src/noyau/pile.rs
//
// Pile bornée (LIFO) à capacité fixe.
// - push refuse au-delà de N et rend l’élément (rien n’est écrasé)
// - pop rend None sur pile vide
// - stockage inline : pas d’allocation

/// Pile LIFO de capacité `N` (l’automate l’utilise avec `N = 2`).
#[derive(Clone, Debug)]
pub struct Pile<T, const N: usize> {
    cases: [Option<T>; N],
    sp: usize,
}

/// Refus d’empiler : la pile est pleine. Rend l’élément refusé.
#[derive(Debug, PartialEq, Eq)]
pub struct PilePleine<T>(pub T);

impl<T, const N: usize> Default for Pile<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Pile<T, N> {
    pub fn new() -> Self {
        Self {
            cases: std::array::from_fn(|_| None),
            sp: 0,
        }
    }

    /// Empile `v`, ou le rend si la capacité est atteinte.
    pub fn push(&mut self, v: T) -> Result<(), PilePleine<T>> {
        if self.sp >= N {
            return Err(PilePleine(v));
        }
        self.cases[self.sp] = Some(v);
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.sp == 0 {
            return None;
        }
        self.sp -= 1;
        self.cases[self.sp].take()
    }

    pub fn len(&self) -> usize {
        self.sp
    }

    pub fn is_empty(&self) -> bool {
        self.sp == 0
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}
