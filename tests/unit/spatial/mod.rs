mod depth;
mod tile;
