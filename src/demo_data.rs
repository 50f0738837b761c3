//! Demo rosters for examples and tests.
//!
//! Rosters are generated from a fixed seed, so the same variant always
//! yields the same employees and preferences.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::RosterConfig;
use crate::models::Employee;

const FIRST_NAMES: [&str; 12] = [
    "Amy", "Beth", "Carl", "Dan", "Elsa", "Flo", "Gus", "Hugo", "Ivy", "Jay", "Kim", "Luz",
];
const LAST_NAMES: [&str; 6] = ["Cole", "Fox", "Green", "Jones", "Poe", "Watt"];

/// Demo roster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoData {
    Small,
    Large,
}

impl std::str::FromStr for DemoData {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SMALL" => Ok(DemoData::Small),
            "LARGE" => Ok(DemoData::Large),
            _ => Err(()),
        }
    }
}

impl DemoData {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoData::Small => "SMALL",
            DemoData::Large => "LARGE",
        }
    }

    fn employee_count(&self) -> usize {
        match self {
            DemoData::Small => 10,
            DemoData::Large => 30,
        }
    }
}

/// Generates a demo roster for the canonical week.
pub fn generate(demo: DemoData) -> Vec<Employee> {
    generate_for(demo, &RosterConfig::default())
}

/// Generates a demo roster for an arbitrary grid.
///
/// Each day gets no preference (30%), a single shift (40%) or two to
/// three ranked shifts (30%).
pub fn generate_for(demo: DemoData, config: &RosterConfig) -> Vec<Employee> {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let names = name_permutations(&mut rng);

    names
        .into_iter()
        .take(demo.employee_count())
        .map(|name| {
            let mut emp = Employee::new(name);
            for day in &config.days {
                let roll: f64 = rng.random();
                if roll < 0.3 {
                    continue;
                }
                if roll < 0.7 {
                    if let Some(shift) = config.shifts.choose(&mut rng) {
                        emp = emp.with_single(day.clone(), shift.clone());
                    }
                } else {
                    let count = rng.random_range(2..=3).min(config.shifts.len());
                    let ranked: Vec<(String, u32)> = config
                        .shifts
                        .choose_multiple(&mut rng, count)
                        .cloned()
                        .zip(1..)
                        .collect();
                    emp = emp.with_ranked(day.clone(), ranked);
                }
            }
            emp
        })
        .collect()
}

fn name_permutations(rng: &mut ChaCha8Rng) -> Vec<String> {
    let mut names: Vec<String> = FIRST_NAMES
        .iter()
        .flat_map(|first| LAST_NAMES.iter().map(move |last| format!("{first} {last}")))
        .collect();
    names.shuffle(rng);
    names
}
