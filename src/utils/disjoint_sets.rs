use std::fmt;

use itertools::Itertools;

use crate::*;

/// Disjoint sets over the elements `0..n` with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<Node>,
    rank: Vec<u8>,
    size: Vec<NumNodes>,
    number_of_sets: NumNodes,
}

impl DisjointSets {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            size: vec![1; n as usize],
            number_of_sets: n,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> NumNodes {
        self.parent.len() as NumNodes
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check_element(&self, a: Node) -> Result<()> {
        if a < self.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: a,
                number_of_nodes: self.len(),
            })
        }
    }

    /// Returns the representative of the set containing `a`
    pub fn find(&mut self, a: Node) -> Result<Node> {
        self.check_element(a)?;
        Ok(self.root_of(a))
    }

    /// Merges the sets containing `a` and `b`.
    /// Returns *true* iff they were different sets before.
    pub fn union(&mut self, a: Node, b: Node) -> Result<bool> {
        self.check_element(a)?;
        self.check_element(b)?;
        Ok(self.merge(a, b))
    }

    /// `find` for elements known to be in range
    /// ** Panics if `a >= n` **
    pub(crate) fn root_of(&mut self, a: Node) -> Node {
        let mut root = a;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut u = a;
        while self.parent[u as usize] != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// `union` for elements known to be in range
    /// ** Panics if `a >= n || b >= n` **
    pub(crate) fn merge(&mut self, a: Node, b: Node) -> bool {
        let mut ra = self.root_of(a);
        let mut rb = self.root_of(b);
        if ra == rb {
            return false;
        }

        if self.rank[ra as usize] < self.rank[rb as usize] {
            std::mem::swap(&mut ra, &mut rb);
        }
        if self.rank[ra as usize] == self.rank[rb as usize] {
            self.rank[ra as usize] += 1;
        }

        self.parent[rb as usize] = ra;
        self.size[ra as usize] += self.size[rb as usize];
        self.number_of_sets -= 1;
        true
    }

    /// Returns *true* iff `a` and `b` belong to the same set
    pub fn same_set(&mut self, a: Node, b: Node) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    pub fn number_of_sets(&self) -> NumNodes {
        self.number_of_sets
    }

    /// Returns the number of elements in the set containing `a`
    pub fn size_of_set(&mut self, a: Node) -> Result<NumNodes> {
        let root = self.find(a)?;
        Ok(self.size[root as usize])
    }

    /// Returns all sets, each sorted, ordered by their smallest element
    pub fn sets(&mut self) -> Vec<Vec<Node>> {
        let mut sets = vec![Vec::new(); self.parent.len()];
        for a in 0..self.len() {
            let root = self.root_of(a);
            sets[root as usize].push(a);
        }
        sets.into_iter()
            .filter(|set| !set.is_empty())
            .sorted_by_key(|set| set[0])
            .collect()
    }
}

impl fmt::Display for DisjointSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = self.clone().sets();
        write!(
            f,
            "{{{}}}",
            sets.iter()
                .map(|set| format!("{{{}}}", set.iter().join(", ")))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn union_and_find() {
        let mut sets = DisjointSets::new(8);
        assert_eq!(sets.number_of_sets(), 8);

        assert!(sets.union(1, 5).unwrap());
        assert!(sets.union(2, 4).unwrap());
        assert!(sets.union(0, 2).unwrap());
        assert!(sets.union(1, 6).unwrap());
        assert!(sets.union(6, 7).unwrap());
        assert!(!sets.union(5, 7).unwrap());

        assert_eq!(sets.number_of_sets(), 3);
        assert!(sets.same_set(0, 4).unwrap());
        assert!(!sets.same_set(0, 1).unwrap());
        assert_eq!(sets.size_of_set(7).unwrap(), 4);
        assert_eq!(sets.size_of_set(3).unwrap(), 1);

        assert_eq!(format!("{sets}"), "{{0, 2, 4}, {1, 5, 6, 7}, {3}}");
    }

    #[test]
    fn out_of_range() {
        let mut sets = DisjointSets::new(3);
        assert!(matches!(
            sets.find(3),
            Err(GraphError::VertexOutOfRange { vertex: 3, .. })
        ));
        assert!(sets.union(0, 9).is_err());
        assert_eq!(sets.number_of_sets(), 3);
    }

    #[test]
    fn long_chain_is_compressed() {
        let n = 100_000;
        let mut sets = DisjointSets::new(n);
        for u in 1..n {
            sets.union(u - 1, u).unwrap();
        }
        assert_eq!(sets.number_of_sets(), 1);
        assert_eq!(sets.size_of_set(n - 1).unwrap(), n);
    }
}
