//! Cursor pagination contract.
//!
//! A page of results arrives as one of three connection shapes: bare
//! `nodes`, cursor-tagged `edges`, or both. When both are present the edges
//! are authoritative and `nodes` is their projection. Nothing here fetches;
//! these types only shape data that has already been retrieved.

use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::codec::{self, describe};
use crate::config::{DecodeConfig, MismatchPolicy};
use crate::error::{DecodeError, DecodeErrorKind};

/// Opaque position token. Only meaningful to the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a cursor string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cursor page info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first item in the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last item in the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<Cursor>,
    /// Whether there is another page after this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next_page: Option<bool>,
    /// Whether there is a page before this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_previous_page: Option<bool>,
}

impl PageInfo {
    /// Page info of an empty, terminal page.
    #[must_use]
    pub const fn empty_page(has_previous_page: bool) -> Self {
        Self {
            start_cursor: None,
            end_cursor: None,
            has_next_page: Some(false),
            has_previous_page: Some(has_previous_page),
        }
    }

    /// `hasNextPage`, absent read as `false`.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.has_next_page.unwrap_or(false)
    }

    /// `hasPreviousPage`, absent read as `false`.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.has_previous_page.unwrap_or(false)
    }

    /// Returns `true` when no page follows this one.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.has_next()
    }

    fn has_cursors(&self) -> bool {
        self.start_cursor.is_some() || self.end_cursor.is_some()
    }
}

/// A node and its position in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct Edge<N> {
    /// Position of `node`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    /// The item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<N>,
}

impl<N> Edge<N> {
    /// Create an edge.
    #[must_use]
    pub fn new(cursor: impl Into<Cursor>, node: N) -> Self {
        Self {
            cursor: Some(cursor.into()),
            node: Some(node),
        }
    }
}

/// Records that can be connection nodes.
pub trait Node {
    /// Global identifier, when the record carries one.
    fn id(&self) -> Option<&str>;
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Connection exposing bare nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "N: Deserialize<'de>"))]
pub struct NodesConnection<N> {
    /// Pagination info.
    #[serde(default)]
    pub page_info: PageInfo,
    /// Items in sequence order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nodes: Vec<N>,
}

/// Connection exposing cursor-tagged edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "N: Deserialize<'de>"))]
pub struct EdgesConnection<N> {
    /// Pagination info.
    #[serde(default)]
    pub page_info: PageInfo,
    /// Edges in sequence order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub edges: Vec<Edge<N>>,
}

/// Connection exposing both; `nodes[i] == edges[i].node` for every `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodesAndEdgesConnection<N> {
    page_info: PageInfo,
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
}

impl<N: Clone> NodesAndEdgesConnection<N> {
    /// Build from edges; `nodes[i]` is `edges[i].node`.
    ///
    /// Every edge must carry a node, otherwise the two lists could not stay
    /// index-aligned. The error names the first node-less edge.
    pub fn from_edges(page_info: PageInfo, edges: Vec<Edge<N>>) -> Result<Self, DecodeError> {
        let nodes = edges
            .iter()
            .enumerate()
            .map(|(index, edge)| edge.node.clone().ok_or_else(|| missing_node(index)))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            page_info,
            nodes,
            edges,
        })
    }
}

fn missing_node(index: usize) -> DecodeError {
    DecodeError::new(DecodeErrorKind::shape("node", "absent"))
        .in_field("node")
        .in_index(index)
        .in_field("edges")
}

impl<N: PartialEq + Clone> NodesAndEdgesConnection<N> {
    /// Build from both lists as delivered upstream, applying `policy` when
    /// they disagree.
    ///
    /// An edge without a node is rejected under either policy.
    pub fn from_parts(
        page_info: PageInfo,
        nodes: Vec<N>,
        edges: Vec<Edge<N>>,
        policy: MismatchPolicy,
    ) -> Result<Self, DecodeError> {
        if let Some(index) = edges.iter().position(|edge| edge.node.is_none()) {
            return Err(missing_node(index));
        }

        let Some(index) = first_mismatch(&nodes, &edges) else {
            return Ok(Self {
                page_info,
                nodes,
                edges,
            });
        };

        match policy {
            MismatchPolicy::Reject => Err(DecodeError::new(
                DecodeErrorKind::ConnectionMismatch { index },
            )
            .in_index(index)
            .in_field("nodes")),
            MismatchPolicy::Warn => {
                warn!(
                    index,
                    nodes = nodes.len(),
                    edges = edges.len(),
                    "connection nodes disagree with edges; rebuilding nodes from edges"
                );
                Self::from_edges(page_info, edges)
            }
        }
    }

    /// First index where `nodes[i] != edges[i].node`, if any.
    pub fn check_consistency(&self) -> Result<(), usize> {
        first_mismatch(&self.nodes, &self.edges).map_or(Ok(()), Err)
    }
}

impl<N> NodesAndEdgesConnection<N> {
    /// Pagination info.
    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// Nodes, projected from edges.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Edges in sequence order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    /// Split into page info and edges.
    #[must_use]
    pub fn into_edges(self) -> (PageInfo, Vec<Edge<N>>) {
        (self.page_info, self.edges)
    }
}

fn first_mismatch<N: PartialEq>(nodes: &[N], edges: &[Edge<N>]) -> Option<usize> {
    let paired = nodes.len().min(edges.len());
    (0..paired)
        .find(|&index| edges[index].node.as_ref() != Some(&nodes[index]))
        .or_else(|| (nodes.len() != edges.len()).then_some(paired))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "N: Deserialize<'de>"))]
struct RawNodesAndEdges<N> {
    #[serde(default)]
    page_info: PageInfo,
    #[serde(default, deserialize_with = "null_as_empty")]
    nodes: Vec<N>,
    #[serde(default, deserialize_with = "null_as_empty")]
    edges: Vec<Edge<N>>,
}

impl<'de, N> Deserialize<'de> for NodesAndEdgesConnection<N>
where
    N: Deserialize<'de> + PartialEq + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawNodesAndEdges::<N>::deserialize(deserializer)?;
        Self::from_parts(raw.page_info, raw.nodes, raw.edges, MismatchPolicy::Warn)
            .map_err(|err| D::Error::custom(codec::hand_off(err)))
    }
}

/// Any of the three connection shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Connection<N> {
    /// `nodes` only.
    Nodes(NodesConnection<N>),
    /// `edges` only.
    Edges(EdgesConnection<N>),
    /// Both.
    NodesAndEdges(NodesAndEdgesConnection<N>),
}

/// Iterator over the nodes of any connection shape.
pub enum NodeIter<'a, N> {
    /// Nodes stored directly.
    Nodes(std::slice::Iter<'a, N>),
    /// Nodes carried by edges.
    Edges(std::slice::Iter<'a, Edge<N>>),
}

impl<'a, N> Iterator for NodeIter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Nodes(nodes) => nodes.next(),
            Self::Edges(edges) => edges.find_map(|edge| edge.node.as_ref()),
        }
    }
}

impl<N> Connection<N> {
    /// Pagination info.
    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        match self {
            Self::Nodes(connection) => &connection.page_info,
            Self::Edges(connection) => &connection.page_info,
            Self::NodesAndEdges(connection) => &connection.page_info,
        }
    }

    /// Edges, when the shape carries them.
    #[must_use]
    pub fn edges(&self) -> Option<&[Edge<N>]> {
        match self {
            Self::Nodes(_) => None,
            Self::Edges(connection) => Some(&connection.edges),
            Self::NodesAndEdges(connection) => Some(&connection.edges),
        }
    }

    /// Nodes in sequence order, whatever the shape.
    pub fn nodes(&self) -> NodeIter<'_, N> {
        match self {
            Self::Nodes(connection) => NodeIter::Nodes(connection.nodes.iter()),
            Self::Edges(connection) => NodeIter::Edges(connection.edges.iter()),
            Self::NodesAndEdges(connection) => NodeIter::Nodes(connection.nodes.iter()),
        }
    }

    /// Consume into nodes in sequence order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        match self {
            Self::Nodes(connection) => connection.nodes,
            Self::Edges(connection) => connection
                .edges
                .into_iter()
                .filter_map(|edge| edge.node)
                .collect(),
            Self::NodesAndEdges(connection) => connection.nodes,
        }
    }

    /// Number of items in the page.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Nodes(connection) => connection.nodes.len(),
            Self::Edges(connection) => connection.edges.len(),
            Self::NodesAndEdges(connection) => connection.edges.len(),
        }
    }

    /// Returns `true` for an empty page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when no page follows this one.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.page_info().is_terminal()
    }

    /// Find a node by id.
    pub fn find_node(&self, id: &str) -> Option<&N>
    where
        N: Node,
    {
        self.nodes().find(|node| node.id() == Some(id))
    }
}

impl<'de, N> Deserialize<'de> for Connection<N>
where
    N: DeserializeOwned + PartialEq + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_connection(value, codec::decode::<N>)
            .map_err(|err| D::Error::custom(codec::hand_off(err)))
    }
}

/// Decode a connection with the default configuration.
///
/// `node_decoder` is [`codec::decode`] for concrete nodes or
/// [`decode_variant`](crate::registry::decode_variant) for polymorphic ones.
pub fn decode_connection<N, F>(value: Value, node_decoder: F) -> Result<Connection<N>, DecodeError>
where
    N: PartialEq + Clone,
    F: Fn(Value) -> Result<N, DecodeError>,
{
    decode_connection_with(value, node_decoder, &DecodeConfig::default())
}

/// Decode a connection.
///
/// Shape: `nodes` and `edges` -> [`Connection::NodesAndEdges`], only `edges`
/// -> [`Connection::Edges`], otherwise [`Connection::Nodes`]. Output order
/// equals input order.
pub fn decode_connection_with<N, F>(
    value: Value,
    node_decoder: F,
    config: &DecodeConfig,
) -> Result<Connection<N>, DecodeError>
where
    N: PartialEq + Clone,
    F: Fn(Value) -> Result<N, DecodeError>,
{
    let Value::Object(mut fields) = value else {
        return Err(DecodeError::new(DecodeErrorKind::shape(
            "connection object",
            describe(&value),
        )));
    };

    let page_info = match fields.remove("pageInfo") {
        None | Some(Value::Null) => PageInfo::default(),
        Some(page_info) => {
            codec::decode::<PageInfo>(page_info).map_err(|err| err.in_field("pageInfo"))?
        }
    };
    let nodes = take_list(&mut fields, "nodes", &node_decoder)?;
    let edges = take_list(&mut fields, "edges", |edge| decode_edge(edge, &node_decoder))?;

    let connection = match (nodes, edges) {
        (Some(nodes), Some(edges)) => Connection::NodesAndEdges(
            NodesAndEdgesConnection::from_parts(page_info, nodes, edges, config.mismatch_policy)?,
        ),
        (None, Some(edges)) => Connection::Edges(EdgesConnection { page_info, edges }),
        (nodes, None) => Connection::Nodes(NodesConnection {
            page_info,
            nodes: nodes.unwrap_or_default(),
        }),
    };

    if config.warn_on_empty_page_cursors
        && connection.is_empty()
        && connection.page_info().has_cursors()
    {
        warn!("empty connection page carries cursors");
    }

    Ok(connection)
}

fn take_list<T, F>(
    fields: &mut Map<String, Value>,
    key: &str,
    decoder: F,
) -> Result<Option<Vec<T>>, DecodeError>
where
    F: Fn(Value) -> Result<T, DecodeError>,
{
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(elements)) => elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                decoder(element).map_err(|err| err.in_index(index).in_field(key))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(other) => {
            Err(DecodeError::new(DecodeErrorKind::shape("array", describe(&other))).in_field(key))
        }
    }
}

fn decode_edge<N, F>(value: Value, node_decoder: &F) -> Result<Edge<N>, DecodeError>
where
    F: Fn(Value) -> Result<N, DecodeError>,
{
    let Value::Object(mut fields) = value else {
        return Err(DecodeError::new(DecodeErrorKind::shape(
            "edge object",
            describe(&value),
        )));
    };

    let cursor = match fields.remove("cursor") {
        None | Some(Value::Null) => None,
        Some(Value::String(cursor)) => Some(Cursor(cursor)),
        Some(other) => {
            return Err(
                DecodeError::new(DecodeErrorKind::shape("string", describe(&other)))
                    .in_field("cursor"),
            );
        }
    };
    let node = match fields.remove("node") {
        None | Some(Value::Null) => None,
        Some(node) => Some(node_decoder(node).map_err(|err| err.in_field("node"))?),
    };

    Ok(Edge { cursor, node })
}

/// Arguments selecting a page (`first`/`after`, `last`/`before`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Forward page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    /// Start after this cursor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Cursor>,
    /// Backward page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    /// End before this cursor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Cursor>,
}

impl PageRequest {
    /// First page, walking forward.
    #[must_use]
    pub const fn forward(first: u32) -> Self {
        Self {
            first: Some(first),
            after: None,
            last: None,
            before: None,
        }
    }

    /// Last page, walking backward.
    #[must_use]
    pub const fn backward(last: u32) -> Self {
        Self {
            first: None,
            after: None,
            last: Some(last),
            before: None,
        }
    }

    /// Arguments for the page after `page`; `None` at the end.
    #[must_use]
    pub fn next_forward(&self, page: &PageInfo) -> Option<Self> {
        if !page.has_next() {
            return None;
        }
        let after = page.end_cursor.clone()?;
        Some(Self {
            first: self.first,
            after: Some(after),
            last: None,
            before: None,
        })
    }

    /// Arguments for the page before `page`; `None` at the start.
    #[must_use]
    pub fn next_backward(&self, page: &PageInfo) -> Option<Self> {
        if !page.has_previous() {
            return None;
        }
        let before = page.start_cursor.clone()?;
        Some(Self {
            first: None,
            after: None,
            last: self.last,
            before: Some(before),
        })
    }
}
