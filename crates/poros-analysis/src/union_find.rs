/// A disjoint-set (union-find) structure over pixel indices.
///
/// This is an independent labeling mechanism kept alongside the traversal
/// engine so tests can cross-check component counts; the engine itself
/// never uses it.
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Creates a new structure with `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Returns the representative of the set containing `id`, with path
    /// compression.
    pub fn find(&mut self, mut id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // collapse the chase path onto the root
        while self.parent[id] != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }

        root
    }

    /// Unites the sets containing `a` and `b`, returning the representative
    /// of the merged set. Union by size.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let a_root = self.find(a);
        let b_root = self.find(b);

        if a_root == b_root {
            return a_root;
        }

        if self.size[a_root] >= self.size[b_root] {
            self.parent[b_root] = a_root;
            self.size[a_root] += self.size[b_root];
            a_root
        } else {
            self.parent[a_root] = b_root;
            self.size[b_root] += self.size[a_root];
            b_root
        }
    }

    /// The size of the set containing `id`.
    pub fn set_size(&mut self, id: usize) -> usize {
        let root = self.find(id);
        self.size[root]
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
