use rand::RngCore;
use rand::rngs::OsRng;
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::random::IndexSampler;

/// Generates a password of exactly `length` characters from `alphabet`,
/// using the operating system's CSPRNG.
pub fn generate_password(length: usize, alphabet: Alphabet) -> Result<String, Error> {
    generate_password_with(&mut OsRng, length, alphabet)
}

/// Generates a password drawing entropy from `rng`.
///
/// Every character is sampled independently and uniformly, with replacement.
pub fn generate_password_with<R: RngCore + ?Sized>(
    rng: &mut R,
    length: usize,
    alphabet: Alphabet,
) -> Result<String, Error> {
    if length == 0 {
        return Err(Error::InvalidArgument(
            "password length must be positive".into(),
        ));
    }

    let chars = alphabet.chars();
    let sampler = IndexSampler::new(chars.len() as u64)?;
    debug!(length, ?alphabet, bits = sampler.bits(), "generating password");

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let index = sampler.sample(rng)? as usize;
        password.push(chars[index] as char);
    }

    Ok(password)
}

/// Parses a password length given on the command line.
///
/// Zero, negative numbers and anything that is not an integer are rejected.
pub fn parse_length(s: &str) -> Result<usize, Error> {
    let s = s.trim();
    let length: i64 = s.parse().map_err(|_| {
        Error::InvalidArgument(format!("'{s}' is not a valid integer"))
    })?;

    if length <= 0 {
        return Err(Error::InvalidArgument(format!(
            "password length must be positive, got {length}"
        )));
    }

    usize::try_from(length).map_err(|_| {
        Error::InvalidArgument(format!("password length {length} is too large"))
    })
}
