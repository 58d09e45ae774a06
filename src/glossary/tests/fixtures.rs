//! Shared CSV fixtures for glossary tests.

use crate::glossary::TermIndex;

pub const HEADER: &str =
    "id,term,definition,category,source,needs_review,aliases,related_terms,image_url";

pub const SAMPLE: &str = "\
id,term,definition,category,source,needs_review,aliases,related_terms,image_url
permit,Permit,Official approval to carry out building work,Documents,industry,false,PW1|P,inspection|building_permit,
building_permit,Building Permit,\"[AI-DRAFT] A permit issued by the city, before construction\",Documents,game,true,BP,permit|zoning,img/bp.png
inspection,Inspection,Review of work against the permit and code,Regulations,industry,false,,permit,
rebar,Rebar,Ribbed steel bar cast into concrete,Materials,industry,false,Reinforcing Bar,slab,
slab,Slab,Flat concrete plate forming a floor,Structural,game,false,,rebar|missing_term,
co,Certificate of Occupancy,[AI-DRAFT] Final sign-off allowing use of the building,Documents,game,true,CO,inspection,
";

pub fn csv(rows: &[&str]) -> String {
    let mut raw = String::from(HEADER);
    for row in rows {
        raw.push('\n');
        raw.push_str(row);
    }
    raw
}

pub fn sample_index() -> TermIndex {
    let mut index = TermIndex::new();
    index.load_from_str(SAMPLE);
    index
}
