//! Tree formatter for buffered output
//!
//! `TreeFormatter` turns a complete `TreeNode` tree into the box-drawing
//! diagram, either as a plain string or printed with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;

/// Marker appended to directories whose entries could not be read,
/// following the tree(1) convention.
const UNREADABLE_MARKER: &str = " [error opening dir]";

/// Render a tree with the default configuration, no report line.
pub fn render_tree(node: &TreeNode) -> String {
    TreeFormatter::new(OutputConfig::default()).format(node)
}

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format the tree as plain text.
    ///
    /// Pure function of the tree's shape and names: identical trees yield
    /// identical bytes. No colors, no trailing report.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, &mut output, "", true, true);
        output
    }

    /// Print the tree to stdout, colorized when configured, followed by the
    /// "N directories, M files" report unless suppressed.
    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let (dir_count, file_count) = self.print_node(node, &mut stdout, "", true, true)?;
        if self.config.show_report {
            writeln!(stdout)?;
            writeln!(stdout, "{} directories, {} files", dir_count, file_count)?;
        }
        Ok(())
    }

    fn format_node(
        &self,
        node: &TreeNode,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> (usize, usize) {
        let connector = if is_last { "└── " } else { "├── " };

        if node.is_file {
            // The root line never carries a connector, even for a file root.
            if !is_root {
                output.push_str(prefix);
                output.push_str(connector);
            }
            output.push_str(&node.name);
            output.push('\n');
            return (0, 1);
        }

        if !is_root {
            output.push_str(prefix);
            output.push_str(connector);
        }
        output.push_str(&node.name);
        output.push('/');
        if !node.readable {
            output.push_str(UNREADABLE_MARKER);
        }
        output.push('\n');

        let new_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let mut dir_count = 0;
        let mut file_count = 0;

        for (i, child) in node.children.iter().enumerate() {
            let child_is_last = i == node.children.len() - 1;
            let (d, f) = self.format_node(child, output, &new_prefix, child_is_last, false);
            dir_count += d;
            file_count += f;
            if child.is_dir() {
                dir_count += 1;
            }
        }

        (dir_count, file_count)
    }

    fn print_node(
        &self,
        node: &TreeNode,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<(usize, usize)> {
        let connector = if is_last { "└── " } else { "├── " };

        if node.is_file {
            if !is_root {
                write!(stdout, "{}{}", prefix, connector)?;
            }
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            writeln!(stdout, "{}", node.name)?;
            stdout.reset()?;
            return Ok((0, 1));
        }

        if !is_root {
            write!(stdout, "{}{}", prefix, connector)?;
        }
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(stdout, "{}/", node.name)?;
        stdout.reset()?;
        if !node.readable {
            write!(stdout, "{}", UNREADABLE_MARKER)?;
        }
        writeln!(stdout)?;

        let new_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let mut dir_count = 0;
        let mut file_count = 0;

        for (i, child) in node.children.iter().enumerate() {
            let child_is_last = i == node.children.len() - 1;
            let (d, f) = self.print_node(child, stdout, &new_prefix, child_is_last, false)?;
            dir_count += d;
            file_count += f;
            if child.is_dir() {
                dir_count += 1;
            }
        }

        Ok((dir_count, file_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TreeNode {
        let mut src = TreeNode::dir("src");
        src.add_child(TreeNode::file("lib.rs"));
        src.add_child(TreeNode::file("main.rs"));

        let mut root = TreeNode::dir("project");
        root.add_child(TreeNode::file("Cargo.toml"));
        root.add_child(src);
        root
    }

    #[test]
    fn test_single_file_root() {
        assert_eq!(render_tree(&TreeNode::file("notes.txt")), "notes.txt\n");
    }

    #[test]
    fn test_empty_directory_root() {
        assert_eq!(render_tree(&TreeNode::dir("empty")), "empty/\n");
    }

    #[test]
    fn test_format_output_exact() {
        let expected = "\
project/
├── Cargo.toml
└── src/
    ├── lib.rs
    └── main.rs
";
        assert_eq!(render_tree(&sample_tree()), expected);
    }

    #[test]
    fn test_continuation_bar_when_dir_not_last() {
        let mut sub = TreeNode::dir("b");
        sub.add_child(TreeNode::file("c.txt"));

        let mut root = TreeNode::dir("root");
        root.add_child(sub);
        root.add_child(TreeNode::file("z.txt"));

        let expected = "\
root/
├── b/
│   └── c.txt
└── z.txt
";
        assert_eq!(render_tree(&root), expected);
    }

    #[test]
    fn test_space_prefix_when_dir_is_last() {
        let mut sub = TreeNode::dir("b");
        sub.add_child(TreeNode::file("c.txt"));

        let mut root = TreeNode::dir("root");
        root.add_child(TreeNode::file("a.txt"));
        root.add_child(sub);

        let expected = "\
root/
├── a.txt
└── b/
    └── c.txt
";
        assert_eq!(render_tree(&root), expected);
    }

    #[test]
    fn test_deep_nesting_prefixes() {
        let mut inner = TreeNode::dir("inner");
        inner.add_child(TreeNode::file("deep.txt"));

        let mut mid = TreeNode::dir("mid");
        mid.add_child(inner);
        mid.add_child(TreeNode::file("mid.txt"));

        let mut root = TreeNode::dir("root");
        root.add_child(mid);
        root.add_child(TreeNode::file("top.txt"));

        let expected = "\
root/
├── mid/
│   ├── inner/
│   │   └── deep.txt
│   └── mid.txt
└── top.txt
";
        assert_eq!(render_tree(&root), expected);
    }

    #[test]
    fn test_empty_directory_renders_without_marker() {
        let mut root = TreeNode::dir("root");
        root.add_child(TreeNode::dir("empty"));
        root.add_child(TreeNode::file("file.txt"));

        let expected = "\
root/
├── empty/
└── file.txt
";
        assert_eq!(render_tree(&root), expected);
    }

    #[test]
    fn test_unreadable_directory_marker() {
        let mut locked = TreeNode::dir("locked");
        locked.readable = false;

        let mut root = TreeNode::dir("root");
        root.add_child(locked);

        let expected = "\
root/
└── locked/ [error opening dir]
";
        assert_eq!(render_tree(&root), expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let tree = sample_tree();
        assert_eq!(render_tree(&tree), render_tree(&tree));
    }

    #[test]
    fn test_format_has_no_report_line() {
        let output = render_tree(&sample_tree());
        assert!(!output.contains("directories"));
    }
}
