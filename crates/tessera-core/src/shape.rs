//! Recursive shape descriptions and their total order.

use std::cmp::Ordering;
use std::fmt;

/// The type of a value built from tagged base elements, functions and
/// fixed-length tuples.
///
/// Shapes are totally ordered so they can key an [`OrderedStore`] or
/// [`OrderedMap`](crate::OrderedMap):
///
/// - every element sorts before every function, and every function before
///   every array;
/// - elements compare by tag;
/// - functions compare by input shape, then output shape;
/// - arrays compare by length, then element by element.
///
/// [`OrderedStore`]: crate::OrderedStore
///
/// # Examples
///
/// ```
/// use tessera_core::Shape;
///
/// let int = Shape::element("int");
/// let int_to_int = Shape::function(int.clone(), int.clone());
/// let pair = Shape::array(vec![int.clone(), int.clone()]);
/// assert!(int < int_to_int);
/// assert!(int_to_int < pair);
/// assert_eq!(int_to_int.to_string(), "(int -> int)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A base element identified by its type tag.
    Element(String),
    /// A function from `input` to `output`.
    Function {
        /// Argument shape.
        input: Box<Shape>,
        /// Result shape.
        output: Box<Shape>,
    },
    /// A fixed-length tuple of shapes.
    Array(Vec<Shape>),
}

impl Shape {
    /// A base element shape.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(tag.into())
    }

    /// A function shape.
    pub fn function(input: Shape, output: Shape) -> Self {
        Self::Function {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// A tuple shape.
    pub fn array(items: Vec<Shape>) -> Self {
        Self::Array(items)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Element(_) => 0,
            Self::Function { .. } => 1,
            Self::Array(_) => 2,
        }
    }

    /// Nesting depth; base elements have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Element(_) => 0,
            Self::Function { input, output } => 1 + input.depth().max(output.depth()),
            Self::Array(items) => 1 + items.iter().map(Shape::depth).max().unwrap_or(0),
        }
    }
}

impl Ord for Shape {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => a.cmp(b),
            (
                Self::Function {
                    input: a_in,
                    output: a_out,
                },
                Self::Function {
                    input: b_in,
                    output: b_out,
                },
            ) => a_in.cmp(b_in).then_with(|| a_out.cmp(b_out)),
            (Self::Array(a), Self::Array(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Shape {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(tag) => write!(f, "{tag}"),
            Self::Function { input, output } => write!(f, "({input} -> {output})"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::OrderedStore;

    fn e(tag: &str) -> Shape {
        Shape::element(tag)
    }

    #[test]
    fn category_order() {
        let f = Shape::function(e("z"), e("z"));
        let a = Shape::array(vec![]);
        assert!(e("z") < f);
        assert!(f < a);
        assert!(e("a") < a);
    }

    #[test]
    fn functions_compare_input_then_output() {
        let int_str = Shape::function(e("int"), e("string"));
        let int_int = Shape::function(e("int"), e("int"));
        let str_int = Shape::function(e("string"), e("int"));
        assert!(int_int < int_str);
        assert!(int_str < str_int);
        let higher = Shape::function(Shape::function(e("int"), e("int")), e("int"));
        assert!(str_int < higher);
    }

    #[test]
    fn arrays_compare_length_first() {
        let long = Shape::array(vec![e("a"), e("a"), e("a")]);
        let short = Shape::array(vec![e("z"), e("z")]);
        assert!(short < long);
        let ab = Shape::array(vec![e("a"), e("b")]);
        let ba = Shape::array(vec![e("b"), e("a")]);
        assert!(ab < ba);
    }

    #[test]
    fn sorted_catalogue_has_no_duplicates() {
        let elementals = ["string", "int", "array"];
        let mut all = Vec::new();
        for (i, tag) in elementals.iter().enumerate() {
            all.push(e(tag));
            all.push(Shape::array(elementals[i..].iter().map(|t| e(t)).collect()));
            all.push(Shape::array(
                elementals
                    .iter()
                    .map(|t| Shape::array(vec![e(t), e(t)]))
                    .collect(),
            ));
        }
        let mut functions = Vec::new();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i % 3 == j % 3 {
                    functions.push(Shape::function(a.clone(), b.clone()));
                }
            }
        }
        let curried: Vec<_> = functions
            .iter()
            .map(|f| Shape::function(e("string"), f.clone()))
            .collect();
        all.extend(functions);
        all.extend(curried);

        let store: OrderedStore<Shape> = all.iter().cloned().collect();
        let mut expected = all.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(store.as_slice(), expected.as_slice());
        assert!(store.as_slice().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn display_and_depth() {
        let s = Shape::function(e("int"), Shape::array(vec![e("int"), e("string")]));
        assert_eq!(s.to_string(), "(int -> [int, string])");
        assert_eq!(s.depth(), 2);
        assert_eq!(e("int").depth(), 0);
    }
}
