use soroban_sdk::{Address, Bytes, BytesN, Env, Vec};

/// Deterministic pseudo-random stream: the i-th word is the first eight bytes
/// of `keccak256(seed || i)`, read big-endian.
pub struct SeedStream<'a> {
    env: &'a Env,
    seed: [u8; 32],
    counter: u32,
}

impl<'a> SeedStream<'a> {
    pub fn new(env: &'a Env, seed: &BytesN<32>) -> Self {
        SeedStream {
            env,
            seed: seed.to_array(),
            counter: 0,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut preimage = Bytes::from_array(self.env, &self.seed);
        preimage.extend_from_array(&self.counter.to_be_bytes());
        self.counter = self.counter.wrapping_add(1);

        let digest: BytesN<32> = self.env.crypto().keccak256(&preimage).into();
        let digest = digest.to_array();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(word)
    }

    /// Uniform value in `0..bound`. Draws falling in the final partial block
    /// of the `u64` range are discarded so every residue is equally likely.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let draw = self.next_u64();
            if draw < zone {
                return (draw % bound) as u32;
            }
        }
    }
}

/// Partial Fisher-Yates over a copy of `participants`: after draw `i` the
/// first `i + 1` slots hold the winners in selection order, so no entry can be
/// drawn twice.
///
/// Callers guarantee `0 < winner_count <= participants.len()`.
pub fn select_winners(
    env: &Env,
    participants: &Vec<Address>,
    winner_count: u32,
    seed: &BytesN<32>,
) -> Vec<Address> {
    let mut pool = participants.clone();
    let mut winners = Vec::new(env);
    let mut stream = SeedStream::new(env, seed);
    let len = pool.len();

    for i in 0..winner_count {
        let j = i + stream.next_below(len - i);
        let picked = pool.get_unchecked(j);
        if j != i {
            let displaced = pool.get_unchecked(i);
            pool.set(j, displaced);
            pool.set(i, picked.clone());
        }
        winners.push_back(picked);
    }

    winners
}
