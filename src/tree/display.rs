use std::fmt;

use super::{Node, OrderedBinaryTree};

/// Number of columns each level of the tree is indented by when no width is given
pub const DEFAULT_INDENT: usize = 3;

const SPACES: &str = "                                                                ";

/// Writes `columns` spaces
///
/// Format widths are limited to `u16`, and deep trees need far more columns than that.
fn write_indent(f: &mut fmt::Formatter<'_>, columns: usize) -> fmt::Result {
    let mut remaining = columns;
    while remaining > 0 {
        let chunk = remaining.min(SPACES.len());
        f.write_str(&SPACES[..chunk])?;
        remaining -= chunk;
    }
    Ok(())
}

/// Renders the tree sideways, one node per line
///
/// The right subtree of each node is printed above its left subtree and every line is indented by
/// `level * indent` columns. The formatter width, if any, is used as the indent.
///
/// ```
/// use ordtree::ordtree;
///
/// let tree = ordtree![5, 3, 8];
/// assert_eq!(tree.to_string(), "-->5\n   -->8\n   -->3\n");
/// assert_eq!(format!("{:1}", tree), "-->5\n -->8\n -->3\n");
/// ```
impl<T: fmt::Display> fmt::Display for OrderedBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(&root, f),
            None => Ok(()),
        }
    }
}

/// Renders the subtree rooted at this node
///
/// Indentation uses the level of each node in the whole tree, so a subtree is printed at the same
/// offset it would have when printing the entire tree.
impl<'a, T: fmt::Display> fmt::Display for Node<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = f.width().unwrap_or(DEFAULT_INDENT);

        let mut stack = vec![(*self, self.level())];
        while let Some((node, level)) = stack.pop() {
            write_indent(f, level.saturating_mul(indent))?;
            writeln!(f, "-->{}", node.value())?;

            // Pushed in reverse so the right subtree is printed first
            if let Some(left) = node.left() {
                stack.push((left, level + 1));
            }
            if let Some(right) = node.right() {
                stack.push((right, level + 1));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedBinaryTree;

    #[test]
    fn display_tree() {
        let tree: OrderedBinaryTree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();

        let expected = "\
-->5
   -->8
      -->9
      -->7
   -->3
      -->4
      -->1
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn display_subtree_keeps_level() {
        let tree: OrderedBinaryTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
        let left = tree.root().unwrap().left().unwrap();
        assert_eq!(format!("{:2}", left), "  -->3\n    -->4\n    -->1\n");
    }

    #[test]
    fn display_empty() {
        let tree: OrderedBinaryTree<i32> = OrderedBinaryTree::new();
        assert_eq!(tree.to_string(), "");
    }
}
