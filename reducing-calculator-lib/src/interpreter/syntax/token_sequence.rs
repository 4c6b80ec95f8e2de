use crate::interpreter::token::Token;
use itertools::Itertools;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter;

/// Addresses a node inside the [`TokenSequence`] that allocated it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Link {
    token: Token,
    previous: Option<NodeId>,
    next: Option<NodeId>,
}

/// A doubly-linked list of tokens stored in an arena.
///
/// The list always starts with a sentinel `+` so that the first number has an operator in front
/// of it. Nodes that are spliced out stay in the arena, unlinked, until the whole sequence is
/// dropped.
#[derive(Debug, Clone)]
pub struct TokenSequence {
    nodes: Vec<Link>,
    tail: NodeId,
}

const HEAD: NodeId = NodeId(0);

impl TokenSequence {
    pub fn new() -> TokenSequence {
        TokenSequence {
            nodes: vec![Link {
                token: Token::Plus,
                previous: None,
                next: None,
            }],
            tail: HEAD,
        }
    }

    /// The sentinel at the start of the sequence.
    pub fn head(&self) -> NodeId {
        HEAD
    }

    pub fn tail(&self) -> NodeId {
        self.tail
    }

    pub fn token(&self, id: NodeId) -> Token {
        self.nodes[id.0].token
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].previous
    }

    /// Links a new node after the current tail.
    pub fn append(&mut self, token: Token) -> NodeId {
        let id = self.allocate(token);
        self.link(Some(self.tail), Some(id));
        self.tail = id;
        id
    }

    /// Unlinks `first..=last` and puts a fresh sentinel in front of it.
    ///
    /// returns: The sentinel heading the detached chain.
    pub fn detach(&mut self, first: NodeId, last: NodeId) -> NodeId {
        let before = self.previous(first);
        let after = self.next(last);
        self.link(before, after);
        if self.tail == last {
            self.tail = before.unwrap_or(HEAD);
        }

        let sentinel = self.allocate(Token::Plus);
        self.link(Some(sentinel), Some(first));
        self.nodes[last.0].next = None;
        sentinel
    }

    /// Splices a new node in place of `first..=last`.
    ///
    /// returns: The new node.
    pub fn replace(&mut self, first: NodeId, last: NodeId, token: Token) -> NodeId {
        let before = self.previous(first);
        let after = self.next(last);
        let id = self.allocate(token);
        self.link(before, Some(id));
        self.link(Some(id), after);
        if self.tail == last {
            self.tail = id;
        }
        id
    }

    /// Walks the chain that `from` belongs to, starting at `from`.
    pub fn iter(&self, from: NodeId) -> impl Iterator<Item = (NodeId, Token)> + '_ {
        iter::successors(Some(from), move |id| self.next(*id)).map(move |id| (id, self.token(id)))
    }

    /// The tokens currently linked from the head, sentinel included.
    pub fn tokens(&self) -> Vec<Token> {
        self.iter(HEAD).map(|(_, token)| token).collect()
    }

    fn allocate(&mut self, token: Token) -> NodeId {
        self.nodes.push(Link {
            token,
            previous: None,
            next: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    fn link(&mut self, previous: Option<NodeId>, next: Option<NodeId>) {
        if let Some(previous) = previous {
            self.nodes[previous.0].next = next;
        }
        if let Some(next) = next {
            self.nodes[next.0].previous = previous;
        }
    }
}

impl Default for TokenSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(tokens: I) -> Self {
        let mut sequence = TokenSequence::new();
        for token in tokens {
            sequence.append(token);
        }
        sequence
    }
}

impl Display for TokenSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter(HEAD).map(|(_, token)| token).join(" "))
    }
}
