/*!
# 2-SAT

A formula in 2-CNF is a conjunction of clauses `(a ∨ b)` over literals `x_k` or `¬x_k`.
[`TwoSatSolver`] decides satisfiability in linear time via the **implication graph**:
every clause `(a ∨ b)` is equivalent to `¬a → b` and `¬b → a`. The formula is unsatisfiable
iff some `x_i` and `¬x_i` lie in the same strongly connected component. Otherwise, setting
`x_i` to *true* exactly if the component of `¬x_i` precedes the component of `x_i` in a
topological order of the condensation yields a satisfying assignment.

Literal `x_k` is vertex `2k` and `¬x_k` is vertex `2k + 1`, so [`negate`] flips the lowest bit.
*/

use std::{fmt, ops::Not, path::Path, str::FromStr};

use fxhash::FxHashSet;

use super::*;

/// The largest variable index such that both of its literals fit into a [`Node`]
pub const MAX_VARIABLE: Node = Node::MAX / 2 - 1;

/// Returns the vertex of the complementary literal
#[inline]
pub fn negate(id: Node) -> Node {
    id ^ 1
}

/// A literal `x_k` or `¬x_k`, represented by its vertex in the implication graph.
///
/// The textual form is the variable index, prefixed with `-` if negated. In particular `-0` is `¬x_0`.
///
/// # Examples
/// ```
/// use grafo::algo::Literal;
///
/// let lit: Literal = "-0".parse().unwrap();
/// assert_eq!(lit.id(), 1);
/// assert_eq!((!lit).to_string(), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(Node);

impl Literal {
    /// The literal `x_variable`
    /// ** Panics if `variable > MAX_VARIABLE` **
    pub fn positive(variable: Node) -> Self {
        assert!(variable <= MAX_VARIABLE);
        Self(2 * variable)
    }

    /// The literal `¬x_variable`
    /// ** Panics if `variable > MAX_VARIABLE` **
    pub fn negative(variable: Node) -> Self {
        assert!(variable <= MAX_VARIABLE);
        Self(2 * variable + 1)
    }

    /// The literal with vertex `id`
    /// ** Panics if `id > 2 * MAX_VARIABLE + 1` **
    pub fn from_id(id: Node) -> Self {
        assert!(id / 2 <= MAX_VARIABLE);
        Self(id)
    }

    /// Returns the vertex of the literal in the implication graph
    pub fn id(self) -> Node {
        self.0
    }

    pub fn variable(self) -> Node {
        self.0 / 2
    }

    pub fn is_negated(self) -> bool {
        self.0 % 2 == 1
    }

    /// Returns the truth value of the literal or `None` if its variable is not assigned
    pub fn evaluate(self, assignment: &[bool]) -> Option<bool> {
        assignment
            .get(self.variable() as usize)
            .map(|&value| value != self.is_negated())
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(negate(self.0))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "-{}", self.variable())
        } else {
            write!(f, "{}", self.variable())
        }
    }
}

impl FromStr for Literal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (negated, digits) = match s.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, s),
        };

        if !digits.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(format!("Invalid literal {s:?}: expected a variable index"));
        }

        let variable: Node = digits
            .parse()
            .map_err(|e| format!("Invalid literal {s:?}: {e}"))?;
        if variable > MAX_VARIABLE {
            return Err(format!(
                "Variable of literal {s:?} exceeds the maximum {MAX_VARIABLE}"
            ));
        }

        Ok(if negated {
            Self::negative(variable)
        } else {
            Self::positive(variable)
        })
    }
}

/// A disjunction of two literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clause(pub Literal, pub Literal);

impl Clause {
    /// Returns *true* if at least one literal is true under `assignment`
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.0.evaluate(assignment) == Some(true) || self.1.evaluate(assignment) == Some(true)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

/// A formula in 2-CNF.
///
/// Its variables are `x_0, ..., x_{k-1}` where `k` is one more than the largest variable
/// mentioned; variables between are present even if no clause uses them.
/// Formulas are read with [`TwoCnf::try_read`] or parsed from a string, one clause per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoCnf {
    clauses: Vec<Clause>,
}

impl TwoCnf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the clause `(a ∨ b)`
    pub fn add_clause(&mut self, a: Literal, b: Literal) {
        self.clauses.push(Clause(a, b));
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn number_of_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns the number of vertices of the implication graph, i.e. the largest literal id
    /// rounded up to cover both literals of its variable. `0` for the empty formula.
    pub fn number_of_literals(&self) -> NumNodes {
        self.clauses
            .iter()
            .flat_map(|&Clause(a, b)| [a.id(), b.id()])
            .max()
            .map_or(0, |max_id| max_id + 2 - max_id % 2)
    }

    pub fn number_of_variables(&self) -> NumNodes {
        self.number_of_literals() / 2
    }

    /// Returns *true* if every clause has a true literal under `assignment`.
    /// Unassigned variables make their literals false.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.clauses.iter().all(|c| c.is_satisfied_by(assignment))
    }
}

impl FromIterator<Clause> for TwoCnf {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl FromStr for TwoCnf {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_read(s.as_bytes())
    }
}

impl fmt::Display for TwoCnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{clause}")?;
        }
        Ok(())
    }
}

/// Decides a [`TwoCnf`] and computes a satisfying assignment if one exists.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// // (x0 ∨ x1) ∧ (x0 ∨ ¬x1) ∧ (¬x0 ∨ x2) ∧ (¬x0 ∨ ¬x2)
/// let formula: TwoCnf = "0 1\n0 -1\n-0 2\n-0 -2".parse().unwrap();
/// let solver = TwoSatSolver::new(&formula);
/// assert!(!solver.is_satisfiable());
/// assert!(matches!(solver.assignment(), Err(GraphError::Unsatisfiable)));
/// ```
#[derive(Debug, Clone)]
pub struct TwoSatSolver {
    implication_graph: DirectedGraph,
    assignment: Option<Vec<bool>>,
}

impl TwoSatSolver {
    pub fn new(formula: &TwoCnf) -> Self {
        let mut implication_graph = DirectedGraph::new(formula.number_of_literals());
        let mut inserted = FxHashSet::default();
        for &Clause(a, b) in formula.clauses() {
            // repeated implications are logically redundant
            for (u, v) in [((!a).id(), b.id()), ((!b).id(), a.id())] {
                if inserted.insert(Edge(u, v)) {
                    implication_graph.push_arc(Arc::new(u, v));
                }
            }
        }

        let sccs = implication_graph.strongly_connected_components();
        let ids = sccs.component_ids();
        let is_satisfiable = ids.chunks_exact(2).all(|lits| lits[0] != lits[1]);

        let assignment = if is_satisfiable {
            Self::extract_assignment(&sccs)
        } else {
            None
        };

        tracing::debug!(
            "2-SAT with {} variables and {} clauses is {}",
            implication_graph.len() / 2,
            formula.number_of_clauses(),
            if assignment.is_some() { "satisfiable" } else { "unsatisfiable" }
        );

        Self {
            implication_graph,
            assignment,
        }
    }

    /// Reads the formula from a file, see [`TwoCnf::try_read_file`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let formula = TwoCnf::try_read_file(path)?;
        Ok(Self::new(&formula))
    }

    /// Sets `x_i` iff the component of `¬x_i` comes first in a topological order of the condensation
    fn extract_assignment(sccs: &StronglyConnectedComponents) -> Option<Vec<bool>> {
        let topo = TopologicalOrder::new(sccs.component_graph());
        tracing::debug!("Topological order of the condensation: {:?}", topo.order().ok()?);

        let ranking = topo.ranking().ok()?;
        Some(
            sccs.component_ids()
                .chunks_exact(2)
                .map(|lits| ranking[lits[1] as usize] < ranking[lits[0] as usize])
                .collect(),
        )
    }

    pub fn is_satisfiable(&self) -> bool {
        self.assignment.is_some()
    }

    /// Returns the value of every variable `x_0, ..., x_{k-1}`.
    /// Fails with [`GraphError::Unsatisfiable`] if there is no satisfying assignment.
    pub fn assignment(&self) -> Result<&[bool]> {
        self.assignment.as_deref().ok_or(GraphError::Unsatisfiable)
    }

    pub fn number_of_variables(&self) -> NumNodes {
        self.implication_graph.number_of_nodes() / 2
    }

    /// Returns the implication graph with vertex `2k` for `x_k` and `2k + 1` for `¬x_k`
    pub fn implication_graph(&self) -> &DirectedGraph {
        &self.implication_graph
    }
}
