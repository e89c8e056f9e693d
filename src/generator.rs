use crate::error::Error;
use crate::record::{join_distinct, Record};
use crate::tables::{Tables, TIMESTAMP};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Promotion years for referred entries, end exclusive.
pub const REFERRED_YEARS: Range<u16> = 1970..2010;
pub const CURRENT_YEAR: u16 = 2020;

pub const MAX_DOMAINS: usize = 4;
pub const MAX_MOTIVATIONS: usize = 2;

/// Produces fake submissions from a set of vocabularies and a random source.
#[derive(Debug, Clone)]
pub struct RowGenerator<'a, R> {
    tables: Tables<'a>,
    rng: R,
}

impl<'a, R: Rng> RowGenerator<'a, R> {
    pub fn new(tables: Tables<'a>, rng: R) -> Result<Self, Error> {
        if let Some(table) = tables.first_empty() {
            return Err(Error::invalid_argument(format!("{} table is empty", table)));
        }
        Ok(RowGenerator { tables, rng })
    }

    pub fn generate_row(&mut self, referred: bool) -> Record {
        let rng = &mut self.rng;
        let first_name = pick(rng, self.tables.names).to_string();
        let last_name = pick(rng, self.tables.names).to_string();
        let year = if referred {
            rng.gen_range(REFERRED_YEARS)
        } else {
            CURRENT_YEAR
        };
        let domains = tags(rng, self.tables.domains, MAX_DOMAINS);
        let motivations = tags(rng, self.tables.motivations, MAX_MOTIVATIONS);

        Record {
            timestamp: TIMESTAMP,
            first_name,
            last_name,
            year,
            domains,
            motivations,
            english: rng.gen(),
        }
    }
}

impl<'a> RowGenerator<'a, StdRng> {
    /// Same seed and tables, same rows.
    pub fn seeded(tables: Tables<'a>, seed: u64) -> Result<Self, Error> {
        RowGenerator::new(tables, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(tables: Tables<'a>) -> Result<Self, Error> {
        RowGenerator::new(tables, StdRng::from_entropy())
    }
}

/// One record from the built-in vocabularies and the thread-local RNG.
pub fn generate_row(referred: bool) -> Record {
    let mut generator = RowGenerator {
        tables: Tables::DEFAULT,
        rng: rand::thread_rng(),
    };
    generator.generate_row(referred)
}

fn pick<'a, R: Rng>(rng: &mut R, table: &[&'a str]) -> &'a str {
    table[rng.gen_range(0..table.len())]
}

// Draws 1..=max tags with replacement; repeats collapse after the draw.
fn tags<R: Rng>(rng: &mut R, table: &[&str], max: usize) -> String {
    let count = rng.gen_range(1..=max);
    let drawn: Vec<&str> = (0..count).map(|_| pick(rng, table)).collect();
    join_distinct(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{DOMAINS, MOTIVATIONS, NAMES};
    use std::collections::HashSet;

    fn generator(seed: u64) -> RowGenerator<'static, StdRng> {
        RowGenerator::seeded(Tables::DEFAULT, seed).unwrap()
    }

    fn distinct_tag_count<'t>(tags: impl Iterator<Item = &'t str>, table: &[&str], max: usize) -> usize {
        let tags: Vec<&str> = tags.collect();
        let unique: HashSet<&str> = tags.iter().cloned().collect();
        assert!(!tags.is_empty() && tags.len() <= max, "bad tag count in {:?}", tags);
        assert_eq!(unique.len(), tags.len(), "duplicate tag in {:?}", tags);
        assert!(tags.iter().all(|tag| table.contains(tag)), "unknown tag in {:?}", tags);
        tags.len()
    }

    #[test]
    fn test_direct_rows_use_current_year() {
        let mut generator = generator(1);
        for _ in 0..1000 {
            assert_eq!(generator.generate_row(false).year, CURRENT_YEAR);
        }
    }

    #[test]
    fn test_referred_rows_use_historical_year() {
        let mut generator = generator(2);
        let mut years = HashSet::new();
        for _ in 0..5000 {
            let year = generator.generate_row(true).year;
            assert!((1970..=2009).contains(&year), "year {} out of range", year);
            years.insert(year);
        }
        assert!(years.contains(&1970));
        assert!(years.contains(&2009));
    }

    #[test]
    fn test_tag_fields_hold_distinct_known_tags() {
        let mut generator = generator(3);
        let mut most_domains = 0;
        let mut most_motivations = 0;
        for _ in 0..2000 {
            let record = generator.generate_row(true);
            let domains = distinct_tag_count(record.domain_tags(), &DOMAINS, MAX_DOMAINS);
            let motivations = distinct_tag_count(record.motivation_tags(), &MOTIVATIONS, MAX_MOTIVATIONS);
            most_domains = most_domains.max(domains);
            most_motivations = most_motivations.max(motivations);
        }
        assert_eq!(most_domains, MAX_DOMAINS);
        assert_eq!(most_motivations, MAX_MOTIVATIONS);
    }

    #[test]
    fn test_constant_fields_and_names() {
        let mut generator = generator(4);
        for _ in 0..500 {
            let record = generator.generate_row(false);
            assert_eq!(record.timestamp, TIMESTAMP);
            assert!(NAMES.contains(&record.first_name.as_str()));
            assert!(NAMES.contains(&record.last_name.as_str()));
        }
    }

    #[test]
    fn test_english_flag_is_balanced() {
        let mut generator = generator(5);
        let trues = (0..10_000).filter(|_| generator.generate_row(false).english).count();
        assert!(trues > 4_500 && trues < 5_500, "{} of 10000 true", trues);
    }

    #[test]
    fn test_same_seed_same_rows() {
        let mut a = generator(42);
        let mut b = generator(42);
        for _ in 0..100 {
            assert_eq!(a.generate_row(true), b.generate_row(true));
        }
    }

    #[test]
    fn test_single_entry_tables() {
        let tables = Tables {
            names: &["Lou"],
            domains: &["SPATIAL"],
            motivations: &["RECHERCHE"],
        };
        let mut generator = RowGenerator::seeded(tables, 7).unwrap();
        let record = generator.generate_row(false);
        assert_eq!(record.first_name, "Lou");
        assert_eq!(record.last_name, "Lou");
        assert_eq!(record.domains, "SPATIAL");
        assert_eq!(record.motivations, "RECHERCHE");
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let tables = Tables {
            domains: &[],
            ..Tables::DEFAULT
        };
        match RowGenerator::seeded(tables, 0) {
            Err(Error::InvalidArgument { error }) => {
                assert_eq!(error.to_string(), "domains table is empty")
            }
            other => panic!("expected InvalidArgument, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_thread_rng_row() {
        let record = generate_row(true);
        assert!(REFERRED_YEARS.contains(&record.year));
    }
}
