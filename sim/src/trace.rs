//! Effect log and the presentation state it folds into.

use std::collections::{BTreeMap, BTreeSet};

use veneer_types::{CssClass, Effect, NodeId, ScrollBehavior, StyleProp};

/// Folded presentation state of one node: the classes, attributes, styles,
/// and text a real DOM element would carry after applying the effect log.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct NodeState {
    pub classes: BTreeSet<String>,
    pub attrs: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub text: Option<String>,
}

/// Ordered log of everything the engine emitted, plus the state it reduces
/// to. Acts as the simulator's stand-in for the presentation layer.
#[derive(Debug, Default, serde::Serialize)]
pub struct EffectTrace {
    log: Vec<Effect>,
    nodes: BTreeMap<u64, NodeState>,
    scrolls: Vec<(f64, ScrollBehavior)>,
    fragment: Option<String>,
}

impl EffectTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append effects to the log and fold them into node state.
    pub fn absorb(&mut self, effects: Vec<Effect>) {
        for effect in &effects {
            self.apply(effect);
        }
        self.log.extend(effects);
    }

    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ClassAdded { node, class } => {
                self.node(*node).classes.insert(class.as_str().to_owned());
            }
            Effect::ClassRemoved { node, class } => {
                self.node(*node).classes.remove(class.as_str());
            }
            Effect::AttrSet { node, attr, value } => {
                self.node(*node)
                    .attrs
                    .insert(attr.as_str().to_owned(), value.clone());
            }
            Effect::AttrRemoved { node, attr } => {
                self.node(*node).attrs.remove(attr.as_str());
            }
            Effect::StyleSet { node, prop, value } => {
                self.node(*node)
                    .styles
                    .insert(prop.as_str().to_owned(), value.clone());
            }
            Effect::StyleCleared { node, prop } => {
                self.node(*node).styles.remove(prop.as_str());
            }
            Effect::TextSet { node, text } => {
                self.node(*node).text = Some(text.clone());
            }
            Effect::ScrollTo { top, behavior } => {
                self.scrolls.push((*top, *behavior));
            }
            Effect::FragmentReplaced { fragment } => {
                self.fragment = Some(fragment.clone());
            }
        }
    }

    fn node(&mut self, id: NodeId) -> &mut NodeState {
        self.nodes.entry(id.value()).or_default()
    }

    #[must_use]
    pub fn log(&self) -> &[Effect] {
        &self.log
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: CssClass) -> bool {
        self.nodes
            .get(&node.value())
            .is_some_and(|n| n.classes.contains(class.as_str()))
    }

    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(&node.value())
            .and_then(|n| n.attrs.get(name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, node: NodeId, prop: StyleProp) -> Option<&str> {
        self.nodes
            .get(&node.value())
            .and_then(|n| n.styles.get(prop.as_str()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes
            .get(&node.value())
            .and_then(|n| n.text.as_deref())
    }

    /// Nodes currently carrying `class`, in id order.
    #[must_use]
    pub fn nodes_with_class(&self, class: CssClass) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, state)| state.classes.contains(class.as_str()))
            .map(|(id, _)| NodeId::new(*id))
            .collect()
    }

    #[must_use]
    pub fn last_scroll(&self) -> Option<(f64, ScrollBehavior)> {
        self.scrolls.last().copied()
    }

    #[must_use]
    pub fn scroll_count(&self) -> usize {
        self.scrolls.len()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Full trace as JSON, for dumping a failing scenario.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("trace serialization cannot fail")
    }

    /// Compact one-line-per-effect rendering of the log, for snapshots.
    #[must_use]
    pub fn render_log(&self) -> String {
        let mut lines = Vec::with_capacity(self.log.len());
        for effect in &self.log {
            let line = match effect {
                Effect::ClassAdded { node, class } => {
                    format!("class+ {node} {}", class.as_str())
                }
                Effect::ClassRemoved { node, class } => {
                    format!("class- {node} {}", class.as_str())
                }
                Effect::AttrSet { node, attr, value } => {
                    format!("attr {node} {}={value}", attr.as_str())
                }
                Effect::AttrRemoved { node, attr } => {
                    format!("attr- {node} {}", attr.as_str())
                }
                Effect::StyleSet { node, prop, value } => {
                    format!("style {node} {}={value}", prop.as_str())
                }
                Effect::StyleCleared { node, prop } => {
                    format!("style- {node} {}", prop.as_str())
                }
                Effect::TextSet { node, text } => format!("text {node} {text}"),
                Effect::ScrollTo { top, behavior } => {
                    let behavior = match behavior {
                        ScrollBehavior::Smooth => "smooth",
                        ScrollBehavior::Auto => "auto",
                    };
                    format!("scroll {top} {behavior}")
                }
                Effect::FragmentReplaced { fragment } => format!("fragment {fragment}"),
            };
            lines.push(line);
        }
        lines.join("\n")
    }
}
