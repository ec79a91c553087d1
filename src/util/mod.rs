pub mod atom_date;
