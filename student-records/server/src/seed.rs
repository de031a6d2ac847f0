//! Random student records for filling a fresh database.

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use rand::{seq::SliceRandom, Rng};
use sort_engine::Student;

const ID_DIGITS: usize = 16;
const MIN_AGE: i32 = 18;
const MAX_AGE: i32 = 25;

const FIRST_NAMES: [&str; 16] = [
    "Ada", "Budi", "Citra", "Dewi", "Eko", "Fajar", "Gita", "Hana", "Indra", "Joko", "Kartika",
    "Lestari", "Maya", "Nadia", "Oscar", "Putri",
];
const LAST_NAMES: [&str; 12] = [
    "Santoso", "Wijaya", "Pratama", "Hidayat", "Saputra", "Lubis", "Nasution", "Siregar",
    "Halim", "Gunawan", "Kusuma", "Tanoto",
];
const STREETS: [&str; 8] = [
    "Jl. Merdeka",
    "Jl. Sudirman",
    "Jl. Diponegoro",
    "Jl. Gatot Subroto",
    "Jl. Ahmad Yani",
    "Jl. Pahlawan",
    "Jl. Veteran",
    "Jl. Asia Afrika",
];
const CITIES: [&str; 8] = [
    "Jakarta", "Bandung", "Surabaya", "Medan", "Yogyakarta", "Semarang", "Makassar", "Denpasar",
];

/// A 16 digit id; leading zeros are kept.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_DIGITS)
        .map(|_| char::from(b'0' + rng.gen_range(0..10)))
        .collect()
}

/// A birth date between 18 and 25 years before `today`, on day 1-28 of its month.
pub fn generate_birth_date<R: Rng>(rng: &mut R, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let year = today.year() - rng.gen_range(MIN_AGE..=MAX_AGE);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);

    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("Generated an invalid date {year}-{month}-{day}"))
}

fn pick<R: Rng>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

pub fn generate_student<R: Rng>(rng: &mut R, today: NaiveDate) -> anyhow::Result<Student> {
    let name = format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES));
    let address = format!(
        "{} No. {}, {}",
        pick(rng, &STREETS),
        rng.gen_range(1..=200),
        pick(rng, &CITIES)
    );

    Ok(Student {
        id: generate_id(rng),
        name,
        address,
        birth_date: generate_birth_date(rng, today)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use rand::{rngs::StdRng, SeedableRng};

    use super::{generate_birth_date, generate_id, generate_student};

    #[test]
    fn test_generate_id_is_sixteen_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let id = generate_id(&mut rng);
            assert_eq!(id.len(), 16);
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_birth_date_range() {
        let mut rng = StdRng::seed_from_u64(2);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        for _ in 0..500 {
            let birth_date = generate_birth_date(&mut rng, today).unwrap();
            assert!((2001..=2008).contains(&birth_date.year()));
            assert!(birth_date.day() <= 28);
        }
    }

    #[test]
    fn test_generate_student_fills_every_field() {
        let mut rng = StdRng::seed_from_u64(3);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let student = generate_student(&mut rng, today).unwrap();

        assert_eq!(student.name.split(' ').count(), 2);
        assert!(student.address.contains(", "));
        assert_eq!(student.id.len(), 16);
    }
}
