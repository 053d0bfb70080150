pub mod summary; // Narrative lab-summary parsing
