//! Writers for each length-prefixed record. Every returned buffer starts with its length word.

use crate::writer::ByteWriter;

const EVENT_DETAILS_LEN: usize = 365;
const SECTION_DETAILS_LEN: usize = 802;
const PAIR_DETAILS_LEN: usize = 274;
const MITCHELL_LEN: usize = 320;
const MITCHELL_SLOTS: usize = 40;

fn framed(body: ByteWriter) -> Vec<u8> {
	let mut out = ByteWriter::new();
	out.u16(body.pos() as u16);
	out.bytes(body.as_slice());
	out.into_bytes()
}

fn framed_fixed(body: ByteWriter, expected: usize, what: &str) -> Vec<u8> {
	assert_eq!(body.pos(), expected, "{what} writer produced the wrong body length");
	framed(body)
}

/// One strat tier inside an event record.
#[derive(Debug, Clone)]
pub struct StratSpec {
	/// Strat letter.
	pub letter: char,
	/// MPs for first, hundredths.
	pub mps_for_first: i16,
	/// Raw real48 masterpoint factor.
	pub mp_factor: [u8; 6],
	/// Minimum MPs to enter the strat.
	pub min_mps: u16,
	/// Event M factor, ten-thousandths.
	pub event_m_factor: i32,
}

impl Default for StratSpec {
	fn default() -> Self {
		Self {
			letter: 'A',
			mps_for_first: 0,
			mp_factor: [0; 6],
			min_mps: 0,
			event_m_factor: 0,
		}
	}
}

/// Inputs for [`event_details`].
#[derive(Debug, Clone, Default)]
pub struct EventSpec {
	/// Event name.
	pub name: String,
	/// Session name.
	pub session: String,
	/// Director name.
	pub director: String,
	/// Club name.
	pub club_name: String,
	/// Club number.
	pub club_number: String,
	/// Memo pointer.
	pub memo: u32,
	/// P factor, hundredths.
	pub p_factor: i16,
	/// Number of active strats.
	pub strat_count: u8,
	/// Packed modification time.
	pub modification_time: u32,
	/// Strat tiers.
	pub strats: [StratSpec; 3],
	/// Raw real48 multi-site factor.
	pub multi_site_factor: [u8; 6],
	/// Game sanction fee, hundredths.
	pub game_fee: i32,
}

/// Event details record.
pub fn event_details(spec: &EventSpec) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.pstr(&spec.name, 25)
		.pstr(&spec.session, 25)
		.pstr(&spec.director, 25)
		.pstr("", 10)
		.pstr("", 17)
		.pstr(&spec.club_name, 25)
		.pstr("", 5)
		.u32(spec.memo)
		.i16(spec.p_factor)
		.u8(0)
		.i16(0)
		.zeros(10)
		.i16(0)
		.u8(0)
		.i16(0)
		.i16(0)
		.i16(0)
		.u8(spec.strat_count)
		.u8(1)
		.zeros(3)
		.pstr(&spec.club_number, 6)
		.u32(spec.modification_time)
		.zeros(2)
		.pstr("", 5)
		.zeros(5);
	for strat in &spec.strats {
		write_strat(&mut w, strat);
	}
	w.zeros(6).bytes(&spec.multi_site_factor).zeros(7).i32(spec.game_fee).i32(0).i32(0).zeros(3);
	framed_fixed(w, EVENT_DETAILS_LEN, "event details")
}

fn write_strat(w: &mut ByteWriter, strat: &StratSpec) {
	w.i16(strat.mps_for_first)
		.u8(0)
		.u8(0)
		.bytes(&strat.mp_factor)
		.zeros(3)
		.u16(strat.min_mps)
		.u16(0)
		.char(strat.letter)
		.u8(0)
		.i32(strat.event_m_factor)
		.i32(0);
	for tier in 0..3_u8 {
		w.u8(tier + 1).u8(0).i16(10_000).u8(tier + 3).bool(true);
	}
}

/// Inputs for [`section_details`].
#[derive(Debug, Clone, Default)]
pub struct SectionSpec {
	/// Section number.
	pub number: u8,
	/// NS pair index pointer.
	pub ns_pairs: u32,
	/// EW pair index pointer.
	pub ew_pairs: u32,
	/// South individual index pointer.
	pub south_players: u32,
	/// West individual index pointer.
	pub west_players: u32,
	/// Howell movement flag.
	pub howell: bool,
	/// Boards per round.
	pub boards_per_round: u8,
	/// Number of rounds.
	pub rounds: u8,
	/// Movement name.
	pub movement_name: String,
	/// Number of tables.
	pub tables: u8,
	/// Memo pointer.
	pub memo: u32,
	/// Team match index pointer.
	pub team_matches: u32,
	/// Movement table pointer.
	pub movement: u32,
}

/// Section details record (declared length 802).
pub fn section_details(spec: &SectionSpec) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.u8(spec.number)
		.u32(spec.ns_pairs)
		.u32(spec.ew_pairs)
		.u32(spec.south_players)
		.u32(spec.west_players)
		.bool(spec.howell)
		.u8(spec.boards_per_round.saturating_mul(spec.rounds))
		.u8(spec.tables)
		.u8(spec.boards_per_round)
		.i16(0)
		.zeros(7)
		.i16(100)
		.i16(0)
		.zeros(3)
		.u8(spec.rounds)
		.pstr(&spec.movement_name, 25)
		.u8(0)
		.u8(0)
		.u16(0)
		.bool(false)
		.u8(spec.tables)
		.i32(0)
		.pstr("", 20)
		.zeros(6);
	for tier in 0..3_u16 {
		w.u8(0).u8(0).u8(0).u8(0).u16(tier).u16(tier).u16(0).u16(0).u8(0).u8(0).u8(0).u8(0);
	}
	w.i16(0)
		.u8(0)
		.u32(0)
		.bool(false)
		.i16(0)
		.zeros(3)
		.u32(0)
		.pstr("", 6)
		.u16(0)
		.u16(0)
		.u16(0)
		.u32(spec.memo)
		.u32(spec.team_matches)
		.u32(spec.movement);
	let reserved = SECTION_DETAILS_LEN - w.pos();
	w.zeros(reserved);
	framed_fixed(w, SECTION_DETAILS_LEN, "section details")
}

/// One player inside a pair record.
#[derive(Debug, Clone, Default)]
pub struct PlayerSpec {
	/// Last name.
	pub last: String,
	/// First name.
	pub first: String,
	/// City.
	pub city: String,
	/// ACBL player number.
	pub acbl_number: String,
	/// ACBL rank letter.
	pub rank: char,
	/// Total MPs, hundredths.
	pub total_mps: i32,
}

/// Inputs for [`pair_details`].
#[derive(Debug, Clone, Default)]
pub struct PairSpec {
	/// Pair number.
	pub id: u16,
	/// Session score, hundredths.
	pub session_score: i32,
	/// Final score, hundredths.
	pub final_score: i32,
	/// Partnership percentage, hundredths.
	pub percentage: i16,
	/// Boards played.
	pub boards_played: u8,
	/// Current-session first-tier award points, hundredths.
	pub current_award: i16,
	/// Section rank per strat.
	pub section_ranks: [u16; 3],
	/// The two players.
	pub players: [PlayerSpec; 2],
}

/// Pair details record (declared length 274).
pub fn pair_details(spec: &PairSpec) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.u16(spec.id)
		.i16(0)
		.i32(spec.session_score)
		.i32(spec.session_score)
		.i32(0)
		.i32(spec.final_score)
		.i16(0)
		.i16(spec.percentage)
		.char('A')
		.i16(0)
		.pstr("", 2)
		.zeros(3)
		.u8(spec.boards_played)
		.u8(0);
	for period in 0..3 {
		let points = if period == 1 { spec.current_award } else { 0 };
		w.i16(points).u8(1).u8(2).i16(0).u8(0).u8(0).i16(0).u8(0).u8(0);
	}
	for rank in spec.section_ranks {
		w.u16(rank).bool(false).u16(rank).bool(false).bool(rank == 1).u16(rank).u16(0).u8(0).u8(0).u16(0).u8(0).u8(0);
	}
	for player in &spec.players {
		let rank = if player.rank == '\0' { ' ' } else { player.rank };
		w.pstr(&player.last, 16)
			.pstr(&player.first, 16)
			.pstr(&player.city, 16)
			.pstr("", 2)
			.pstr("", 2)
			.pstr(&player.acbl_number, 7)
			.char(rank)
			.i32(player.total_mps)
			.i16(0)
			.i16(0)
			.i16(0);
	}
	framed_fixed(w, PAIR_DETAILS_LEN, "pair details")
}

/// Pair index record listing pair detail pointers for one direction.
pub fn pair_index(direction: u8, players_per_entry: u8, pairs: &[u32]) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.u8(direction).u8(players_per_entry).u16(pairs.len() as u16);
	for ptr in pairs {
		w.u32(*ptr);
	}
	framed(w)
}

/// Board index record.
pub fn board_index(section: u8, boards: &[(u16, u32)]) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.u8(section).u16(boards.len() as u16);
	for (number, ptr) in boards {
		w.u16(*number).u32(*ptr);
	}
	framed(w)
}

/// One result line inside [`board_results`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardEntrySpec {
	/// Round number.
	pub round: u8,
	/// Table number.
	pub table: u8,
	/// NS pair.
	pub ns_pair: u16,
	/// NS raw score.
	pub ns_score: i16,
	/// NS matchpoints, hundredths.
	pub ns_matchpoints: i32,
	/// EW pair.
	pub ew_pair: u16,
	/// EW raw score.
	pub ew_score: i16,
	/// EW matchpoints, hundredths.
	pub ew_matchpoints: i32,
}

/// Board results record.
pub fn board_results(board_id: u16, competitive_units: u16, entries: &[BoardEntrySpec]) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.u16(board_id).u16(competitive_units).u16(entries.len() as u16);
	for entry in entries {
		w.u8(entry.round)
			.u8(entry.table)
			.u16(entry.ns_pair)
			.i16(entry.ns_score)
			.i32(entry.ns_matchpoints)
			.u16(entry.ew_pair)
			.i16(entry.ew_score)
			.i32(entry.ew_matchpoints);
	}
	framed(w)
}

/// Mitchell movement table. Missing slots are zero-filled.
pub fn mitchell_table(reassignments: &[[u8; 4]], initial: &[[u8; 4]]) -> Vec<u8> {
	assert!(reassignments.len() <= MITCHELL_SLOTS && initial.len() <= MITCHELL_SLOTS);
	let mut w = ByteWriter::new();
	for half in [reassignments, initial] {
		for quad in half {
			w.bytes(quad);
		}
		w.zeros(4 * (MITCHELL_SLOTS - half.len()));
	}
	framed_fixed(w, MITCHELL_LEN, "mitchell table")
}

/// Memo or note text block.
pub fn memo(text: &str) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.bytes(text.as_bytes());
	framed(w)
}

/// One round-robin schedule inside [`team_match_index`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinSpec {
	/// Whether the round robin is in use.
	pub active: bool,
	/// Starting round.
	pub starting_round: u8,
	/// Table number per team slot.
	pub tables: [u8; 3],
}

/// One match line inside [`team_match_index`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamMatchSpec {
	/// Round number.
	pub round: u8,
	/// Opponent team number.
	pub opponent: u8,
	/// IMPs, tenths.
	pub imps: i16,
	/// Victory points, hundredths.
	pub victory_points: i16,
	/// Table letter.
	pub table: char,
}

/// Team match index record.
pub fn team_match_index(section: u8, teams: u8, round_robins: [RoundRobinSpec; 2], matches: &[TeamMatchSpec]) -> Vec<u8> {
	let mut w = ByteWriter::new();
	w.u8(section).u8(teams).u8(matches.len() as u8).u8(0).u8(1).u8(0);
	for rr in round_robins {
		w.bool(rr.active).u8(rr.starting_round);
		for table in rr.tables {
			w.pstr("A", 2).u8(0).u8(table);
		}
	}
	w.u16(matches.len() as u16);
	for item in matches {
		w.u8(item.round)
			.u8(item.opponent)
			.u8(1)
			.u8(0)
			.i16(item.imps)
			.i16(item.victory_points)
			.u8(7)
			.char(item.table)
			.u8(0)
			.u8(0);
	}
	framed(w)
}
