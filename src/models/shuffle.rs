use rand::Rng;
use rand::seq::SliceRandom;

/// Return the options in a uniformly random order.
pub fn shuffle_options<R: Rng + ?Sized>(mut options: Vec<String>, rng: &mut R) -> Vec<String> {
    options.shuffle(rng);
    options
}
