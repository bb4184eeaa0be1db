mod end_to_end;
mod tomorrow;
