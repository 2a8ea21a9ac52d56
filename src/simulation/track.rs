//! Track graph of the board
//!
//! A fixed adjacency table over the board cells. Every cell has an anode side
//! and a cathode side with up to two neighbors each. The table is validated
//! once when loaded and never mutated afterwards.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use petgraph::algo::{astar, connected_components};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

use super::layout::BOARD_CELLS;
use super::types::{Branch, CellId, Side, NO_LINK};

/// Neighbor record for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackCell {
    pub anode_next: Option<CellId>,
    pub cathode_next: Option<CellId>,
    pub anode_next2: Option<CellId>,
    pub cathode_next2: Option<CellId>,
}

impl TrackCell {
    /// Build a cell from raw table bytes, `NO_LINK` marking an absent neighbor
    pub const fn raw(anode: u8, cathode: u8, anode2: u8, cathode2: u8) -> Self {
        Self {
            anode_next: CellId::from_raw(anode),
            cathode_next: CellId::from_raw(cathode),
            anode_next2: CellId::from_raw(anode2),
            cathode_next2: CellId::from_raw(cathode2),
        }
    }

    /// Build a platform cell; all four links name the adjacent track cell
    pub const fn platform(track: u8) -> Self {
        Self::raw(track, track, track, track)
    }

    /// A cell with no connections at all
    pub const fn isolated() -> Self {
        Self::raw(NO_LINK, NO_LINK, NO_LINK, NO_LINK)
    }

    /// Platforms are encoded with matching anode and cathode links
    pub fn is_platform(&self) -> bool {
        self.anode_next.is_some() && self.anode_next == self.cathode_next
    }

    pub fn next(&self, side: Side, branch: Branch) -> Option<CellId> {
        match (side, branch) {
            (Side::Anode, Branch::Primary) => self.anode_next,
            (Side::Anode, Branch::Secondary) => self.anode_next2,
            (Side::Cathode, Branch::Primary) => self.cathode_next,
            (Side::Cathode, Branch::Secondary) => self.cathode_next2,
        }
    }

    /// Whether either neighbor on `side` is `target`
    pub fn links_to(&self, side: Side, target: CellId) -> bool {
        self.next(side, Branch::Primary) == Some(target)
            || self.next(side, Branch::Secondary) == Some(target)
    }

    /// All present links, primary before secondary, anode before cathode
    pub fn links(&self) -> impl Iterator<Item = CellId> {
        [
            self.anode_next,
            self.cathode_next,
            self.anode_next2,
            self.cathode_next2,
        ]
        .into_iter()
        .flatten()
    }
}

/// Read-only graph of board cells
#[derive(Debug, Clone)]
pub struct TrackGraph {
    cells: Vec<TrackCell>,

    /// Undirected view of the track cells (platforms excluded)
    layout: UnGraph<CellId, ()>,

    /// Maps track cells to their node indices in `layout`
    cell_to_node: HashMap<CellId, NodeIndex>,
}

impl TrackGraph {
    /// Load the compiled-in board layout
    pub fn board() -> Result<Self> {
        Self::from_cells(BOARD_CELLS.to_vec()).context("Board layout failed validation")
    }

    /// Validate a cell table and build the graph from it
    pub fn from_cells(cells: Vec<TrackCell>) -> Result<Self> {
        if cells.is_empty() {
            bail!("Track table is empty");
        }
        if cells.len() > NO_LINK as usize {
            bail!(
                "Track table has {} cells, at most {} are addressable",
                cells.len(),
                NO_LINK
            );
        }

        for (index, cell) in cells.iter().enumerate() {
            for link in cell.links() {
                if link.index() >= cells.len() {
                    bail!(
                        "Cell {} links to {} outside the {}-cell table",
                        index,
                        link,
                        cells.len()
                    );
                }
            }
        }

        for (index, cell) in cells.iter().enumerate() {
            if cell.is_platform() {
                let track = cell
                    .anode_next
                    .context("Platform without an adjacent track cell")?;
                if cells[track.index()].is_platform() {
                    bail!("Platform {} sits beside another platform {}", index, track);
                }
                continue;
            }

            if cell.links().next().is_none() {
                // Unwired LED, never reachable by a train
                continue;
            }

            for side in [Side::Anode, Side::Cathode] {
                if cell.next(side, Branch::Primary).is_none() {
                    bail!("Track cell {} is a dead end on its {:?} side", index, side);
                }
            }

            for link in cell.links() {
                let target = &cells[link.index()];
                if target.is_platform() {
                    bail!("Track cell {} links into platform cell {}", index, link);
                }
                let this = CellId(index as u8);
                if !target.links().any(|back| back == this) {
                    warn!("One-way link: cell {} reaches {} but not back", index, link);
                }
            }
        }

        let mut layout = UnGraph::<CellId, ()>::new_undirected();
        let mut cell_to_node = HashMap::new();
        for (index, cell) in cells.iter().enumerate() {
            if !cell.is_platform() && cell.links().next().is_some() {
                let id = CellId(index as u8);
                cell_to_node.insert(id, layout.add_node(id));
            }
        }
        for (index, cell) in cells.iter().enumerate() {
            let Some(&from) = cell_to_node.get(&CellId(index as u8)) else {
                continue;
            };
            for link in cell.links() {
                if let Some(&to) = cell_to_node.get(&link) {
                    layout.update_edge(from, to, ());
                }
            }
        }

        debug!(
            "Loaded track graph: {} cells, {} track nodes, {} links",
            cells.len(),
            layout.node_count(),
            layout.edge_count()
        );

        Ok(Self {
            cells,
            layout,
            cell_to_node,
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, cell: CellId) -> Option<&TrackCell> {
        self.cells.get(cell.index())
    }

    pub fn contains(&self, cell: CellId) -> bool {
        cell.index() < self.cells.len()
    }

    /// Neighbor of `cell` on `side`; `None` for absent links or unknown cells
    pub fn neighbor(&self, cell: CellId, side: Side, branch: Branch) -> Option<CellId> {
        self.cell(cell).and_then(|c| c.next(side, branch))
    }

    /// Whether `cell` reaches `target` through either neighbor on `side`
    pub fn links_to(&self, cell: CellId, side: Side, target: CellId) -> bool {
        self.cell(cell).is_some_and(|c| c.links_to(side, target))
    }

    pub fn is_platform(&self, cell: CellId) -> bool {
        self.cell(cell).is_some_and(TrackCell::is_platform)
    }

    /// Platform cells derived from the topology, in cell order
    pub fn platform_cells(&self) -> Vec<CellId> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_platform())
            .map(|(index, _)| CellId(index as u8))
            .collect()
    }

    /// Number of wired track cells
    pub fn track_cell_count(&self) -> usize {
        self.layout.node_count()
    }

    /// Number of separate track networks on the board
    pub fn component_count(&self) -> usize {
        connected_components(&self.layout)
    }

    /// Shortest number of moves between two track cells, ignoring direction
    pub fn hops_between(&self, from: CellId, to: CellId) -> Option<usize> {
        let start = *self.cell_to_node.get(&from)?;
        let goal = *self.cell_to_node.get(&to)?;

        astar(&self.layout, start, |node| node == goal, |_| 1usize, |_| 0usize)
            .map(|(cost, _)| cost)
    }
}
