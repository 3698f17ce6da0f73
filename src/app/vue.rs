// src/app/vue.rs
//
// Vue texte : une ligne par calcul terminé.
// - résultat : la valeur (Display du type : 7, -3, 3.5…)
// - erreur   : "Error: <message>"
// Chaque ligne est vidée tout de suite (usage interactif).

use std::fmt;
use std::io::{self, Write};

use crate::noyau::ErreurCalcul;

pub struct Vue<W> {
    sortie: W,
}

impl<W: Write> Vue<W> {
    pub fn new(sortie: W) -> Self {
        Self { sortie }
    }

    pub fn resultat(&mut self, v: impl fmt::Display) -> io::Result<()> {
        writeln!(self.sortie, "{v}")?;
        self.sortie.flush()
    }

    pub fn erreur(&mut self, e: &ErreurCalcul) -> io::Result<()> {
        writeln!(self.sortie, "Error: {e}")?;
        self.sortie.flush()
    }
}
