//! Static vehicle catalog per category.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::pricing::Category;

/// A vehicle model offered for rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub brand: &'static str,
    pub model: &'static str,
    /// Image path relative to the site root
    pub image: &'static str,
}

const fn vehicle(brand: &'static str, model: &'static str, image: &'static str) -> Vehicle {
    Vehicle { brand, model, image }
}

const CARS: &[Vehicle] = &[
    vehicle("Renault", "Clio", "imagens/renault-clio-5d-schwarz-2020.png"),
    vehicle("Renault", "Megane", "imagens/renault-megane-kombi-blau-2018.png"),
    vehicle("Renault", "Captur", "imagens/renault-captur-5d-blau-2020.png"),
    vehicle("Volkswagen", "Golf", "imagens/2020-VW-Golf.png"),
    vehicle("Toyota", "Corolla", "imagens/toyota-corolla.png"),
    vehicle("Ford", "Focus", "imagens/ford-focus.png"),
    vehicle("Seat", "Leon", "imagens/seat-leon.png"),
    vehicle("Peugeot", "308", "imagens/peugeot-308.png"),
];

const VANS: &[Vehicle] = &[
    vehicle("Renault", "Trafic", "imagens/renault-trafic-van-brown-2015.png"),
    vehicle("Volkswagen", "Transporter", "imagens/vw-transporter.png"),
    vehicle("Ford", "Transit", "imagens/ford-transit.png"),
    vehicle("Mercedes-Benz", "Vito", "imagens/mercedes-benz-vito.png"),
    vehicle("Peugeot", "Expert", "imagens/peugeot-expert.png"),
    vehicle("Citroën", "Jumpy", "imagens/CITROEN_JUMPY.png"),
    vehicle("Opel", "Vivaro", "imagens/opel-vivaro.png"),
    vehicle("Fiat", "Talento", "imagens/fiat-talento-crew.png"),
];

/// Number of vehicles shown with a search result
pub const SEARCH_SAMPLE_SIZE: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct FleetCatalog;

impl FleetCatalog {
    pub fn vehicles(&self, category: Category) -> &'static [Vehicle] {
        match category {
            Category::Car => CARS,
            Category::Van => VANS,
        }
    }

    /// Up to `count` distinct vehicles of `category`, uniformly at random.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        category: Category,
        count: usize,
        rng: &mut R,
    ) -> Vec<Vehicle> {
        self.vehicles(category)
            .choose_multiple(rng, count)
            .cloned()
            .collect()
    }
}
