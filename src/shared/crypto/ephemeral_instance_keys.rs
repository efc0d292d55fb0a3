//! The random seed the instance signs access tokens with when the
//! configuration does not provide a secret. It is regenerated on every start,
//! which invalidates all the tokens issued by previous runs.
use rand::rngs::ThreadRng;
use rand::Rng;

pub type Seed = [u8; 32];

lazy_static! {
    pub static ref RANDOM_SEED: Seed = Rng::gen(&mut ThreadRng::default());
}
