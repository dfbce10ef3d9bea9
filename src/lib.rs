// src/lib.rs
//
// Solveur Q-pur — bibliothèque (noyau seul, sans UI)

pub mod noyau;
