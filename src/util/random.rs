use rand::{distributions::Alphanumeric, Rng};

pub trait Random {
    fn gen<R: Rng>(rng: &mut R) -> Self;
}

const RANDOM_STRING_MIN: usize = 0;
const RANDOM_STRING_MAX: usize = 10;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen<R: Rng>(rng: &mut R) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for i32 {
    // non-negative keys in [0, i32::MAX)
    fn gen<R: Rng>(rng: &mut R) -> Self {
        rng.gen_range(0..i32::MAX)
    }
}
