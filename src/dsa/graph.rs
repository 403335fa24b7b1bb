use std::borrow::Borrow;

use crate::linear_algebra::matrix::Matrix;
use crate::network_flow::capacity::Capacity;

type HashMap<K,V> = std::collections::hash_map::HashMap<K,V,nohash::BuildNoHashHasher<usize>>;
pub type NodeSet = std::collections::hash_set::HashSet<usize,nohash::BuildNoHashHasher<usize>>;

fn node_set_with_capacity(capacity:usize) -> NodeSet {
    NodeSet::with_capacity_and_hasher(capacity,nohash::BuildNoHashHasher::default())
}

#[derive(Clone,Debug,Default)]
struct Neighbours {
    to:NodeSet,
}

#[derive(Clone)]
struct Visited {
    visited_nodes:NodeSet,
    unvisited_nodes:NodeSet
}

impl From<&DirectedGraph> for Visited {
    fn from(value: &DirectedGraph) -> Self {
        let mut unvisited_nodes = node_set_with_capacity(value.nodes_len());
        unvisited_nodes.extend(value.nodes.keys().copied());
        Self {visited_nodes:node_set_with_capacity(value.nodes_len()),unvisited_nodes}
    }
}

impl Visited {
    fn visit(&mut self,node:&usize) {
        //操作条件：unvisited里存在，且visited里不存在
        if self.unvisited_nodes.remove(node) {
            debug_assert!(!self.visited_nodes.contains(node));
            self.visited_nodes.insert(*node);
        }
    }
    //None:不存在
    //Some(false):存在但并未访问
    //Some(true):存在且已经访问
    fn is_visited(&self,node:&usize) -> Option<bool> {
        if self.unvisited_nodes.contains(node) {
            debug_assert!(!self.visited_nodes.contains(node));
            return Some(false);
        }
        if self.visited_nodes.contains(node) {
            return Some(true)
        }
        None
    }
}

// sparse adjacency view over node indices, used for reachability queries
// on residual networks
#[derive(Clone,Debug,Default)]
pub struct DirectedGraph {
    edges_len:usize,
    nodes:HashMap<usize,Neighbours>
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_capacity(capacity:usize) -> Self {
        Self {edges_len:0,nodes:HashMap::with_capacity_and_hasher(capacity, nohash::BuildNoHashHasher::default())}
    }
    pub fn nodes_len(&self) -> usize {
        self.nodes.len()
    }
    pub fn edges_len(&self) -> usize {
        self.edges_len
    }
    pub fn push_node(&mut self,node:usize) {
        self.nodes.entry(node).or_default();
    }
    pub fn push_pair(&mut self,start:usize,end:usize) {
        self.push_node(end);
        let neighbours = self.nodes.entry(start).or_default();
        if neighbours.to.insert(end) {
            self.edges_len += 1;
        }
    }
    // visit order of every node reachable from start_node, start_node first
    pub fn dfs(&self,start_node:usize) -> Option<Vec<usize>> {
        if !self.nodes.contains_key(&start_node) {
            return None;
        }
        let mut visited = Visited::from(self);
        let mut stack = Vec::with_capacity(self.nodes_len());
        let mut order = Vec::with_capacity(self.nodes_len());
        stack.push(start_node);
        while let Some(current) = stack.pop() {
            if visited.is_visited(&current)? {
                continue;
            }
            visited.visit(&current);
            order.push(current);
            for next_neighbour in self.nodes.get(&current)?.to.iter() {
                if !visited.is_visited(next_neighbour)? {
                    stack.push(*next_neighbour);
                }
            }
        }
        Some(order)
    }
    pub fn reachable_from(&self,start_node:usize) -> Option<NodeSet> {
        let order = self.dfs(start_node)?;
        let mut set = node_set_with_capacity(order.len());
        set.extend(order);
        Some(set)
    }
}

// every index of a square matrix becomes a node, every strictly positive entry an edge
impl<T:Capacity> From<&Matrix<T>> for DirectedGraph {
    fn from(value: &Matrix<T>) -> Self {
        let (size,_) = value.dimension();
        let mut new_graph = Self::with_capacity(size);
        for node in 0..size {
            new_graph.push_node(node);
        }
        for ((start,end),capacity) in value.iter_indexed() {
            if *capacity > T::ZERO {
                new_graph.push_pair(start, end);
            }
        }
        new_graph
    }
}

impl<A:Borrow<(usize,usize)>> FromIterator<A> for DirectedGraph {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let size = match iter.size_hint() {
            (_,Some(higher)) => {higher},
            (lower,None) => {lower}
        };
        let mut new_graph = Self::with_capacity(size);
        for pair in iter {
            let (start,end) = pair.borrow();
            new_graph.push_pair(*start, *end);
        }
        new_graph
    }
}
