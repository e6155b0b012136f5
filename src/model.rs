//! Spin-glass model on an arbitrary weighted graph.

use crate::error::{Error, Result};
use crate::instance::Instance;
use rand::Rng;

/// A spin-carrying vertex with its field weight and incident couplings.
#[derive(Debug, Clone)]
pub struct SpinNode {
    spin: i8,
    field: i64,
    couplings: Vec<(u32, i64)>,
}

impl SpinNode {
    fn random_with(rng: &mut impl Rng) -> Self {
        Self {
            spin: if rng.gen::<bool>() { 1 } else { -1 },
            field: 0,
            couplings: Vec::new(),
        }
    }

    /// Current spin, exactly +1 or -1.
    #[inline(always)]
    pub fn spin(&self) -> i8 {
        self.spin
    }

    /// Field weight applied to this node.
    #[inline(always)]
    pub fn field(&self) -> i64 {
        self.field
    }

    /// Incident couplings as (neighbor index, weight) pairs. A node
    /// gets one entry for every edge it appears in, on either end.
    #[inline(always)]
    pub fn couplings(&self) -> &[(u32, i64)] {
        &self.couplings
    }

    /// Negate the spin. The only state mutation in the whole model.
    pub fn flip(&mut self) {
        self.spin = -self.spin;
    }

    /// Local energy of this node against the current spin table.
    ///
    /// The field term enters once per incident coupling, so a node with
    /// k edges contributes its field k times here. The whole-model
    /// Hamiltonian counts each field exactly once instead; see
    /// [`SpinModel::total_energy`].
    pub fn local_energy(&self, nodes: &[SpinNode]) -> i64 {
        let spin = self.spin as i64;
        let mut e = 0i64;
        for &(neighbor, w) in &self.couplings {
            e += self.field * spin + w * spin * nodes[neighbor as usize].spin as i64;
        }
        -e
    }
}

/// The full node table plus the whole-model edge and field ledgers.
#[derive(Debug, Clone)]
pub struct SpinModel {
    nodes: Vec<SpinNode>,
    edges: Vec<(u32, u32, i64)>,
    fields: Vec<(u32, i64)>,
}

impl SpinModel {
    /// Build a model from a parsed instance, initializing every spin
    /// from a caller-supplied RNG (preferred for reproducibility).
    ///
    /// Triples are consumed in input order. Distinct endpoints record a
    /// symmetric coupling on both nodes; a self-loop sets the node's
    /// field weight, overwriting any earlier one. Duplicate couplings
    /// between the same pair accumulate, they are not deduplicated.
    pub fn from_instance_with(rng: &mut impl Rng, instance: &Instance) -> Result<Self> {
        let node_qty = instance.node_qty;
        let mut nodes: Vec<SpinNode> = (0..node_qty).map(|_| SpinNode::random_with(rng)).collect();
        let mut edges = Vec::new();
        let mut fields = Vec::new();

        for &(a, b, w) in &instance.weights {
            for node in [a, b] {
                if node >= node_qty {
                    return Err(Error::NodeOutOfRange { node, node_qty });
                }
            }
            if a != b {
                nodes[a].couplings.push((b as u32, w));
                nodes[b].couplings.push((a as u32, w));
                edges.push((a as u32, b as u32, w));
            } else {
                nodes[a].field = w;
                fields.push((a as u32, w));
            }
        }

        Ok(Self {
            nodes,
            edges,
            fields,
        })
    }

    /// Convenience wrapper that uses `thread_rng`.
    pub fn from_instance(instance: &Instance) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::from_instance_with(&mut rng, instance)
    }

    /// Number of nodes.
    #[inline(always)]
    pub fn node_qty(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only node table, indexed by node id.
    #[inline(always)]
    pub fn nodes(&self) -> &[SpinNode] {
        &self.nodes
    }

    /// Flip the spin at `index`.
    pub fn flip(&mut self, index: usize) {
        self.nodes[index].flip();
    }

    /// One (a, b, w) entry per distinct-endpoint triple, in input order.
    #[inline(always)]
    pub fn edges(&self) -> &[(u32, u32, i64)] {
        &self.edges
    }

    /// One (node, w) entry per self-loop triple, in input order.
    #[inline(always)]
    pub fn fields(&self) -> &[(u32, i64)] {
        &self.fields
    }

    /// Whole-model Hamiltonian over the current spins:
    /// -(Σ_edges s_a·s_b·w + Σ_fields s_n·w).
    pub fn total_energy(&self) -> i64 {
        let spin = |i: u32| self.nodes[i as usize].spin as i64;
        let edge_sum: i64 = self
            .edges
            .iter()
            .map(|&(a, b, w)| spin(a) * spin(b) * w)
            .sum();
        let field_sum: i64 = self.fields.iter().map(|&(n, w)| spin(n) * w).sum();
        -(edge_sum + field_sum)
    }
}
