//! The two-dimensional Ising model on a periodic square lattice.

#![allow(non_snake_case)]

use auto_args::AutoArgs;
use rand::prelude::*;

use crate::rng::MyRng;

/// The parameters needed to configure the lattice.
///
/// These parameters are normally set via command-line arguments.
#[derive(Serialize, Deserialize, Debug, AutoArgs, Clone)]
pub struct IsingParams {
    /// Width of the square grid
    pub L: usize,
    /// Start from independently random spins rather than the ordered
    /// alternating pattern
    pub random: bool,
}

/// An Ising model on an L by L periodic square lattice.
///
/// Spins are stored in a flat row-major array (site = row*L + column),
/// so neighbor lookup is pure index arithmetic and the working set is a
/// single contiguous buffer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ising {
    /// Width of the square grid
    pub L: usize,
    /// The spins themselves
    S: Vec<i8>,
}

impl Ising {
    /// An ordered lattice of alternating spins: site i holds -1 when i
    /// is even and +1 when i is odd.
    pub fn ordered(L: usize) -> Self {
        assert!(L > 0);
        let S = (0..L * L).map(|i| if i % 2 == 1 { 1 } else { -1 }).collect();
        Ising { L, S }
    }

    /// A lattice with every spin independently up or down with equal
    /// probability, drawn from the given generator.
    pub fn random(L: usize, rng: &mut MyRng) -> Self {
        assert!(L > 0);
        let mut ising = Ising {
            L,
            S: vec![1; L * L],
        };
        for s in ising.S.iter_mut() {
            // The following picks a random number +1 or -1.
            *s = (rng.next_u64() as i8 & 1) * 2 - 1;
        }
        ising
    }

    /// The number of sites N = L*L.
    pub fn num_sites(&self) -> usize {
        self.S.len()
    }

    /// The spins, in row-major order.
    pub fn spins(&self) -> &[i8] {
        &self.S
    }

    /// The four neighbors of site `i` under periodic boundary
    /// conditions, as `[left, right, up, down]` linear indices.
    ///
    /// The lattice is a torus, so for L <= 2 some of the four indices
    /// coincide (and for L == 1 a site is its own neighbor).
    #[inline]
    pub fn neighbors(&self, i: usize) -> [usize; 4] {
        let L = self.L;
        let row = i / L;
        let col = i % L;
        let left = row * L + (col + L - 1) % L;
        let right = row * L + (col + 1) % L;
        let up = ((row + L - 1) % L) * L + col;
        let down = ((row + 1) % L) * L + col;
        [left, right, up, down]
    }

    /// The total energy change, in units of the coupling J, of flipping
    /// the spin at site `i`, without actually flipping it.
    ///
    /// This is 2*s_i*(sum of the four neighbor spins), so it is always
    /// one of -8, -4, 0, 4, or 8.  Positive means the flip is
    /// energetically unfavorable.
    #[inline]
    pub fn delta_energy(&self, i: usize) -> i32 {
        let [left, right, up, down] = self.neighbors(i);
        let neighbor_tot = self.S[left] as i32
            + self.S[right] as i32
            + self.S[up] as i32
            + self.S[down] as i32;
        2 * self.S[i] as i32 * neighbor_tot
    }

    /// Flip the spin at site `i` in place.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        self.S[i] *= -1;
    }

    /// The magnetization per site, (1/N) * sum of all spins.
    ///
    /// The sign is physically meaningless for this symmetric
    /// Hamiltonian; callers accumulating statistics should take the
    /// absolute value.
    pub fn magnetization(&self) -> f64 {
        let total: i64 = self.S.iter().map(|&s| s as i64).sum();
        total as f64 / self.num_sites() as f64
    }

    /// The energy per site, (1/N) * sum over sites of
    /// s_i*(s_right + s_down).
    ///
    /// Counting only the forward (right and down) bonds visits each
    /// bond of the torus exactly once without a double-counting
    /// correction.  No minus sign is applied, so a fully aligned
    /// lattice has e = +2.
    pub fn energy_per_site(&self) -> f64 {
        let mut total: i64 = 0;
        for i in 0..self.num_sites() {
            let [_, right, _, down] = self.neighbors(i);
            total += self.S[i] as i64 * (self.S[right] as i64 + self.S[down] as i64);
        }
        total as f64 / self.num_sites() as f64
    }
}
