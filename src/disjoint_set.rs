use error::{Error, Result};

// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//
// Weighted quick-union: the smaller tree always goes under the larger root,
// so no tree is taller than log2(len) and `find` can stay a pure read.
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	size: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	pub fn make_singletons(len: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..len).collect(),
			size: vec![1; len],
			count: len,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Number of components.
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn find(&self, x: usize) -> Result<usize> {
		self.validate(x)?;
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		Ok(root)
	}

	pub fn connected(&self, x: usize, y: usize) -> Result<bool> {
		Ok(self.find(x)? == self.find(y)?)
	}

	/// Merges the components of `x` and `y`. On equal sizes the root of `y`
	/// is attached under the root of `x`.
	pub fn unite(&mut self, x: usize, y: usize) -> Result<()> {
		let x_root = self.find(x)?;
		let y_root = self.find(y)?;
		if x_root == y_root {
			return Ok(());
		}
		if self.size[x_root] < self.size[y_root] {
			self.parent[x_root] = y_root;
			self.size[y_root] += self.size[x_root];
		} else {
			self.parent[y_root] = x_root;
			self.size[x_root] += self.size[y_root];
		}
		self.count -= 1;
		Ok(())
	}

	fn validate(&self, x: usize) -> Result<()> {
		if x >= self.parent.len() {
			return Err(Error::ElementOutOfRange { index: x, len: self.parent.len() });
		}
		Ok(())
	}

	#[cfg(test)]
	fn depth(&self, x: usize) -> usize {
		let mut d = 0;
		let mut node = x;
		while self.parent[node] != node {
			node = self.parent[node];
			d += 1;
		}
		d
	}
}
