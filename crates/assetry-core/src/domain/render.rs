//! Asset tree → Swift declarations.
//!
//! One depth-first traversal shared by every asset kind; a [`RenderPolicy`]
//! decides how a container opens and how a single leaf is spelled.
//!
//! Layout rules:
//! - one tab per nesting level, the root block opening at depth 1
//! - leaf members first, in listing order, then nested blocks
//! - exactly one blank line between the members and the first nested block,
//!   none when there is no nested block

use crate::domain::{
    entities::Node,
    naming::{lowercase_first, type_name},
    value_objects::{Carrier, Namespace},
};

/// Per-kind spelling of a rendered block.
pub trait RenderPolicy {
    /// Opening line of a container, without indentation or newline.
    fn open_block(&self, type_name: &str) -> String;

    /// Member line for one content leaf, without indentation or newline.
    fn leaf(&self, name: &str) -> String;
}

/// Images: a `String`-backed enum with one case per image set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImagesPolicy;

impl RenderPolicy for ImagesPolicy {
    fn open_block(&self, type_name: &str) -> String {
        format!("enum {type_name}: String {{")
    }

    fn leaf(&self, name: &str) -> String {
        let case = lowercase_first(name);
        if case == name {
            format!("case {case}")
        } else {
            // keep the raw value equal to the asset name
            format!("case {case} = {}", string_literal(name))
        }
    }
}

/// Colors: computed static members built through a carrier's by-name init.
#[derive(Debug, Clone)]
pub struct ColorsPolicy {
    carrier: Carrier,
}

impl ColorsPolicy {
    pub fn new(carrier: Carrier) -> Self {
        Self { carrier }
    }
}

impl RenderPolicy for ColorsPolicy {
    fn open_block(&self, type_name: &str) -> String {
        format!("enum {type_name} {{")
    }

    fn leaf(&self, name: &str) -> String {
        let carrier = self.carrier.as_str();
        format!(
            "static var {}: {carrier} {{ {carrier}({}) }}",
            lowercase_first(name),
            string_literal(name)
        )
    }
}

/// Render `tree` with its root renamed to `namespace`.
pub fn render(tree: &Node, namespace: &Namespace, policy: &dyn RenderPolicy) -> String {
    let mut out = String::new();
    render_block(tree, namespace.as_str(), 1, policy, &mut out);
    out
}

fn render_block(node: &Node, name: &str, depth: usize, policy: &dyn RenderPolicy, out: &mut String) {
    let indent = "\t".repeat(depth);
    let member_indent = "\t".repeat(depth + 1);

    out.push_str(&indent);
    out.push_str(&policy.open_block(&type_name(name)));
    out.push('\n');

    for leaf in node.leaves() {
        out.push_str(&member_indent);
        out.push_str(&policy.leaf(leaf.name()));
        out.push('\n');
    }

    let mut groups = node.groups().peekable();
    if groups.peek().is_some() {
        out.push('\n');
        for group in groups {
            render_block(group, group.name(), depth + 1, policy, out);
        }
    }

    out.push_str(&indent);
    out.push_str("}\n");
}

fn string_literal(s: &str) -> String {
    let mut lit = String::with_capacity(s.len() + 2);
    lit.push('"');
    for c in s.chars() {
        match c {
            '"' => lit.push_str("\\\""),
            '\\' => lit.push_str("\\\\"),
            _ => lit.push(c),
        }
    }
    lit.push('"');
    lit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_images() -> Node {
        Node::container(
            "Images",
            vec![Node::container(
                "Icons",
                vec![Node::content("home"), Node::content("back")],
            )],
        )
    }

    fn color(name: &str) -> ColorsPolicy {
        ColorsPolicy::new(Carrier::new(name).unwrap())
    }

    #[test]
    fn renders_images_block() {
        let out = render(&sample_images(), &Namespace::default(), &ImagesPolicy);
        assert_eq!(
            out,
            "\tenum app: String {\n\
             \n\
             \t\tenum icons: String {\n\
             \t\t\tcase home\n\
             \t\t\tcase back\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn renders_colors_block_with_original_name() {
        let tree = Node::container(
            "Colors",
            vec![Node::container("Brand", vec![Node::content("Primary")])],
        );
        let out = render(&tree, &Namespace::default(), &color("Color"));
        assert_eq!(
            out,
            "\tenum app {\n\
             \n\
             \t\tenum brand {\n\
             \t\t\tstatic var primary: Color { Color(\"Primary\") }\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn carrier_changes_only_the_member_type() {
        let tree = Node::container("Colors", vec![Node::content("accent")]);
        let ui = render(&tree, &Namespace::default(), &color("UIColor"));
        assert!(ui.contains("static var accent: UIColor { UIColor(\"accent\") }"));
        assert!(ui.starts_with("\tenum app {\n"));
    }

    #[test]
    fn root_name_is_replaced_by_namespace() {
        let ns = Namespace::new("Assets").unwrap();
        let out = render(&sample_images(), &ns, &ImagesPolicy);
        assert!(out.starts_with("\tenum assets: String {\n"));
        assert!(!out.contains("images"));
    }

    #[test]
    fn leaf_only_container_has_no_blank_line() {
        let tree = Node::container("Images", vec![Node::content("a"), Node::content("b")]);
        let out = render(&tree, &Namespace::default(), &ImagesPolicy);
        assert_eq!(out, "\tenum app: String {\n\t\tcase a\n\t\tcase b\n\t}\n");
        assert!(!out.contains("\n\n"));
    }

    #[test]
    fn leaves_come_before_nested_blocks_with_one_blank_line() {
        let tree = Node::container(
            "Images",
            vec![
                Node::container("Flags", vec![Node::content("fr")]),
                Node::content("logo"),
            ],
        );
        let out = render(&tree, &Namespace::default(), &ImagesPolicy);
        assert_eq!(
            out,
            "\tenum app: String {\n\
             \t\tcase logo\n\
             \n\
             \t\tenum flags: String {\n\
             \t\t\tcase fr\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn sibling_order_is_listing_order() {
        let tree = Node::container(
            "Images",
            vec![Node::content("b"), Node::content("a"), Node::content("c")],
        );
        let out = render(&tree, &Namespace::default(), &ImagesPolicy);
        let cases: Vec<_> = out.lines().filter(|l| l.contains("case")).collect();
        assert_eq!(cases, vec!["\t\tcase b", "\t\tcase a", "\t\tcase c"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let tree = sample_images();
        let first = render(&tree, &Namespace::default(), &ImagesPolicy);
        let second = render(&tree, &Namespace::default(), &ImagesPolicy);
        assert_eq!(first, second);
    }

    #[test]
    fn capitalized_image_keeps_raw_value() {
        assert_eq!(ImagesPolicy.leaf("Home"), "case home = \"Home\"");
        assert_eq!(ImagesPolicy.leaf("home"), "case home");
    }

    #[test]
    fn quotes_in_names_are_escaped() {
        assert_eq!(
            color("Color").leaf("odd\"name"),
            "static var odd\"name: Color { Color(\"odd\\\"name\") }"
        );
    }

    #[test]
    fn deep_nesting_indents_one_tab_per_level() {
        let tree = Node::container(
            "Images",
            vec![Node::container(
                "A",
                vec![Node::container("B", vec![Node::content("x")])],
            )],
        );
        let out = render(&tree, &Namespace::default(), &ImagesPolicy);
        assert!(out.contains("\n\t\t\tenum b: String {\n\t\t\t\tcase x\n\t\t\t}\n"));
    }
}
