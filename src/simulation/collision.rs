//! Pairwise body-body contact
//!
//! Every body is treated as its bounding sphere. Each unordered pair (i, j)
//! with i < j is visited once per tick in arena order; later pairs see the
//! positions and velocities already changed by earlier pairs in the same pass.

use tracing::trace;

use super::states::{Body, NVec3};

/// What happened to one pair during resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// Bounding spheres do not overlap
    Apart,
    /// Overlapping with coincident centers, no normal can be formed; nothing applied
    Coincident,
    /// Pushed apart, but already separating along the normal; no impulse
    Separating,
    /// Pushed apart and an impulse of this magnitude was exchanged
    Resolved { impulse: f64 },
}

/// Totals for one pass over all pairs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionStats {
    pub contacts: usize, // overlapping pairs (including skips)
    pub impulses: usize, // pairs that exchanged an impulse
}

/// Resolve one overlapping pair `a` / `b` with restitution `e`
///
/// 1. push both bodies apart by half the overlap each along the normal
/// 2. skip the impulse if they already separate (`vn > 0`)
/// 3. exchange `j = -(1+e) vn / (1/ma + 1/mb)` along the normal
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f64) -> PairOutcome {
    // r points from a to b
    let r = b.position - a.position;
    let distance = r.norm();
    let min_distance = a.bounding_radius() + b.bounding_radius();

    if distance >= min_distance {
        return PairOutcome::Apart;
    }

    if distance == 0.0 {
        return PairOutcome::Coincident;
    }

    // Unit contact normal from a toward b
    let n: NVec3 = r / distance;

    // De-penetration: split the overlap evenly
    let overlap = min_distance - distance;
    let push = n * (overlap * 0.5);
    a.position -= push;
    b.position += push;

    // Relative velocity of b seen from a, projected on the normal
    let vn = (b.velocity - a.velocity).dot(&n);
    if vn > 0.0 {
        return PairOutcome::Separating;
    }

    // Equal and opposite impulse, weighted by inverse masses
    let j = -(1.0 + restitution) * vn / (a.inverse_mass() + b.inverse_mass());
    let impulse = n * j;
    a.velocity -= impulse * a.inverse_mass();
    b.velocity += impulse * b.inverse_mass();

    PairOutcome::Resolved { impulse: j }
}

/// Borrow bodies `i` and `j` (`i < j`) mutably at the same time
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Run [`resolve_pair`] over all unordered pairs in stable (i, j), i < j order
pub fn resolve_collisions(bodies: &mut [Body], restitution: f64) -> CollisionStats {
    let n = bodies.len();
    let mut stats = CollisionStats::default();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            let outcome = resolve_pair(a, b, restitution);

            match outcome {
                PairOutcome::Apart => continue,
                PairOutcome::Resolved { .. } => stats.impulses += 1,
                PairOutcome::Coincident | PairOutcome::Separating => {}
            }
            stats.contacts += 1;
            trace!(i, j, ?outcome, "pair contact");
        }
    }

    stats
}
