mod mapdata;
