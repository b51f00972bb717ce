use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::node::Node;

const KEY_MAX: u16 = 100;

/// Generate arbitrary keys from [0..[`KEY_MAX`]).
pub(crate) fn arbitrary_key() -> impl Strategy<Value = u16> {
    0..KEY_MAX
}

/// Render the subtree rooted at `n` as a Graphviz DOT digraph, labelling each
/// node with its key and AVL height.
pub(crate) fn print_dot<K>(n: &Node<K>) -> String
where
    K: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    )
    .unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<K, W>(n: &Node<K>, buf: &mut W)
where
    W: std::fmt::Write,
    K: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | h={}"];"#,
        n.key(),
        n.key(),
        n.height(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.key(),
                    v.key()
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key()).unwrap();
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", n.key(), n.key()).unwrap();
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_dot() {
        let mut root = Box::new(Node::new(2));
        root.insert(1);
        root.insert(3);

        let dot = print_dot(&root);

        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains(r#""2" [label="2 | h=2"];"#));
        assert!(dot.contains(r#""1" [label="1 | h=1"];"#));
        assert!(dot.contains(r#""2" -> "1" [color = "orange1";];"#));
        assert!(dot.contains(r#""2" -> "3" [color = "orange1";];"#));
        assert!(dot.contains(r#""3" -> "null_3" [style=invis];"#));
    }
}
