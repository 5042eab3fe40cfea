//! The fixed vocabulary of high-value professional terms that extracted
//! resume keywords are compared against. Immutable and process-wide.

pub const REFERENCE_VOCABULARY: [&str; 73] = [
    "accomplished",
    "achieved",
    "adapted",
    "administered",
    "analyzed",
    "assessed",
    "budgeted",
    "built",
    "collaborated",
    "communicated",
    "completed",
    "coordinated",
    "created",
    "delegated",
    "delivered",
    "designed",
    "developed",
    "directed",
    "earned",
    "effective",
    "efficient",
    "engineered",
    "established",
    "evaluated",
    "expanded",
    "experience",
    "expertise",
    "facilitated",
    "formulated",
    "generated",
    "guided",
    "impact",
    "implemented",
    "improved",
    "increased",
    "initiated",
    "innovated",
    "integrated",
    "launched",
    "led",
    "managed",
    "mentored",
    "negotiated",
    "organized",
    "oversaw",
    "planned",
    "presented",
    "produced",
    "proficiency",
    "programmed",
    "project",
    "promoted",
    "proposed",
    "reduced",
    "resolved",
    "revenue",
    "saved",
    "solved",
    "spearheaded",
    "strategic",
    "streamlined",
    "supervised",
    "supported",
    "target",
    "taught",
    "team",
    "technical",
    "tested",
    "trained",
    "upgraded",
    "utilized",
    "won",
    "wrote",
];
