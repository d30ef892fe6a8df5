use rand::Rng;

/// Number of characters in a freshly issued vehicle id.
pub const VEHICLE_ID_LENGTH: usize = 12;

fn uppercase_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.gen_range(b'A'..=b'Z'))
}

fn digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.gen_range(b'0'..=b'9'))
}

/// Generates a random id made of `length` uppercase letters.
///
/// Nothing guarantees the id is unique.
pub fn generate_vehicle_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length).map(|_| uppercase_letter(rng)).collect()
}

/// Derives a license plate like `AB-12-CD` from the first two characters of the id.
pub fn generate_license_plate<R: Rng + ?Sized>(rng: &mut R, vehicle_id: &str) -> String {
    let prefix: String = vehicle_id.chars().take(2).collect();
    let digits: String = (0..2).map(|_| digit(rng)).collect();
    let letters: String = (0..2).map(|_| uppercase_letter(rng)).collect();
    format!("{prefix}-{digits}-{letters}")
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn is_plate(plate: &str) -> bool {
        let parts: Vec<&str> = plate.split('-').collect();
        parts.len() == 3
            && parts[0].len() == 2
            && parts[0].chars().all(|c| c.is_ascii_uppercase())
            && parts[1].len() == 2
            && parts[1].chars().all(|c| c.is_ascii_digit())
            && parts[2].len() == 2
            && parts[2].chars().all(|c| c.is_ascii_uppercase())
    }

    #[test]
    fn id_is_uppercase_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let id = generate_vehicle_id(&mut rng, VEHICLE_ID_LENGTH);
            assert_eq!(id.len(), VEHICLE_ID_LENGTH);
            assert!(id.chars().all(|c| c.is_ascii_uppercase()), "{id}");
        }
    }

    #[test]
    fn plate_starts_with_id_prefix() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let id = generate_vehicle_id(&mut rng, VEHICLE_ID_LENGTH);
            let plate = generate_license_plate(&mut rng, &id);
            assert!(is_plate(&plate), "{plate}");
            assert_eq!(&plate[..2], &id[..2]);
        }
    }

    #[test]
    fn short_id_uses_what_is_there() {
        let mut rng = StdRng::seed_from_u64(1);
        let plate = generate_license_plate(&mut rng, "Q");
        assert!(plate.starts_with("Q-"));
        assert_eq!(plate.len(), 7);
    }

    #[test]
    fn same_seed_same_output() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let id_a = generate_vehicle_id(&mut a, VEHICLE_ID_LENGTH);
        let id_b = generate_vehicle_id(&mut b, VEHICLE_ID_LENGTH);
        assert_eq!(id_a, id_b);
        assert_eq!(
            generate_license_plate(&mut a, &id_a),
            generate_license_plate(&mut b, &id_b)
        );
    }
}
