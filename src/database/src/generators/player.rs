use engine::{Player, PositionGroup};
use rand::Rng;
use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../data/names.json");

/// Packaged name material for generated players.
#[derive(Deserialize)]
pub struct NamePool {
    pub initials: Vec<String>,
    pub surnames: Vec<String>,
    pub nationalities: Vec<String>,
}

impl NamePool {
    pub fn load() -> NamePool {
        serde_json::from_str(STATIC_NAMES_JSON).expect("packaged name pool parses")
    }
}

pub struct PlayerGenerator;

impl PlayerGenerator {
    /// A fresh player biased towards one position archetype. The caller
    /// guarantees name uniqueness within a roster.
    pub fn generate<R: Rng>(rng: &mut R, pool: &NamePool, archetype: PositionGroup) -> Player {
        let mut player = Player::placeholder();

        player.name = Self::generate_name(rng, pool);
        player.age = rng.gen_range(17..35);
        player.nationality = pool.nationalities[rng.gen_range(0..pool.nationalities.len())].clone();
        player.preferred_side = Self::generate_preferred_side(rng).to_string();

        let main = rng.gen_range(55..90);
        let support = rng.gen_range(30..60);
        let weak = rng.gen_range(10..35);

        let (st, tk, ps, sh) = match archetype {
            PositionGroup::Goalkeeper => (main, weak, weak, weak),
            PositionGroup::Defender => (weak, main, support, weak),
            PositionGroup::Forward => (weak, weak, support, main),
            _ => (weak, support, main, support),
        };

        player.st = st;
        player.tk = tk;
        player.ps = ps;
        player.sh = sh;
        player.sm = rng.gen_range(35..85);
        player.ag = rng.gen_range(15..65);
        player.fit = 100;

        player
    }

    pub fn generate_name<R: Rng>(rng: &mut R, pool: &NamePool) -> String {
        let initial = &pool.initials[rng.gen_range(0..pool.initials.len())];
        let surname = &pool.surnames[rng.gen_range(0..pool.surnames.len())];

        format!("{}.{}", initial, surname)
    }

    fn generate_preferred_side<R: Rng>(rng: &mut R) -> &'static str {
        match rng.gen_range(0..100) {
            0..=49 => "C",
            50..=64 => "R",
            65..=79 => "L",
            80..=86 => "RC",
            87..=93 => "LC",
            94..=96 => "RL",
            _ => "RLC",
        }
    }
}
